use crate::{Decoder, Error, LineEndingMode};

const GSV: &str = "$GPGSV,1,1,01,05,45,120,38*44";

#[test]
fn test_line_ending_modes() {
    let cases = [
        (LineEndingMode::Optional, "", true),
        (LineEndingMode::Optional, "\r\n", true),
        (LineEndingMode::Optional, "\n", true),
        (LineEndingMode::Required, "\r\n", true),
        (LineEndingMode::Required, "\n", false),
        (LineEndingMode::Required, "", false),
        (LineEndingMode::Forbidden, "", true),
        (LineEndingMode::Forbidden, "\r\n", false),
    ];

    for (mode, line_ending, accepted) in cases {
        let input = format!("{GSV}{line_ending}");
        let message = Decoder::new(mode).decode(&input);

        assert_eq!(message.is_some(), accepted, "{mode:?} {line_ending:?}");
        if let Some(message) = message {
            assert_eq!(message.raw_message, input);
            assert_eq!(message.gsv().map(|gsv| gsv.satellites.len()), Some(1));
        }
    }
}

#[test]
fn test_line_ending_violation_is_parsing_error() {
    let result = Decoder::new(LineEndingMode::Required).try_decode(GSV);
    assert!(matches!(result, Err(Error::ParsingError(_))));
}

#[test]
fn test_trailing_data_after_line_ending() {
    let input = format!("{GSV}\r\n$GPGSV");
    assert!(Decoder::default().decode(&input).is_none());
}
