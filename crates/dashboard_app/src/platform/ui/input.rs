use dashboard_core::Msg;

/// One line typed by the user, decoded.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Core(Msg),
    Help,
    Quit,
}

/// Parses `name <text>`, `location <text>`, `submit`, `regenerate`, `help`
/// and `quit`. Field text is kept verbatim; validation happens on submit.
pub fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim_end_matches(['\r', '\n']);
    let (keyword, rest) = match line.trim_start().split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest),
        None => (line.trim(), ""),
    };

    match keyword.to_ascii_lowercase().as_str() {
        "" => Ok(Command::Core(Msg::NoOp)),
        "name" => Ok(Command::Core(Msg::NameChanged(rest.to_string()))),
        "location" => Ok(Command::Core(Msg::LocationChanged(rest.to_string()))),
        "submit" => Ok(Command::Core(Msg::Submitted)),
        "regenerate" => Ok(Command::Core(Msg::RegenerateClicked)),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(format!("unknown command '{other}', type 'help'")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_text_keeps_inner_spaces_and_ampersands() {
        assert_eq!(
            parse_command("name Cake & Co\n"),
            Ok(Command::Core(Msg::NameChanged("Cake & Co".to_string())))
        );
        assert_eq!(
            parse_command("location Navi Mumbai\r\n"),
            Ok(Command::Core(Msg::LocationChanged("Navi Mumbai".to_string())))
        );
    }

    #[test]
    fn keyword_may_be_followed_by_a_tab() {
        assert_eq!(
            parse_command("name\tCake"),
            Ok(Command::Core(Msg::NameChanged("Cake".to_string())))
        );
    }

    #[test]
    fn bare_field_keyword_clears_field() {
        assert_eq!(
            parse_command("name"),
            Ok(Command::Core(Msg::NameChanged(String::new())))
        );
    }

    #[test]
    fn keywords_are_case_insensitive() {
        assert_eq!(parse_command("SUBMIT"), Ok(Command::Core(Msg::Submitted)));
        assert_eq!(
            parse_command("  Regenerate  "),
            Ok(Command::Core(Msg::RegenerateClicked))
        );
        assert_eq!(parse_command("quit"), Ok(Command::Quit));
    }

    #[test]
    fn blank_line_is_noop_and_unknown_is_rejected() {
        assert_eq!(parse_command("   \n"), Ok(Command::Core(Msg::NoOp)));
        assert!(parse_command("launch").is_err());
    }
}
