use super::*;

#[test]
fn send_joins_words_and_defaults_session_file() {
    let cli = Cli::try_parse_from([
        "matrix-chat",
        "--endpoint",
        "http://localhost:5678/webhook",
        "send",
        "follow",
        "the",
        "rabbit",
    ])
    .expect("parses");

    assert_eq!(cli.endpoint.as_deref(), Some("http://localhost:5678/webhook"));
    assert_eq!(cli.session_file, PathBuf::from(DEFAULT_SESSION_FILE));
    match cli.command {
        Command::Send { text } => assert_eq!(text.join(" "), "follow the rabbit"),
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn send_requires_text() {
    assert!(Cli::try_parse_from(["matrix-chat", "send"]).is_err());
}

#[test]
fn session_file_can_be_overridden() {
    let cli = Cli::try_parse_from(["matrix-chat", "--session-file", "/tmp/s.json", "session"])
        .expect("parses");
    assert_eq!(cli.session_file, PathBuf::from("/tmp/s.json"));
    assert!(matches!(cli.command, Command::Session));
}

#[test]
fn render_line_prefixes_timestamp_and_role() {
    let message = Message::system("Connection error.", Duration::from_secs(3_725));
    assert_eq!(render_line(&message), "[01:02:05] SYSTEM> Connection error.");
}

#[tokio::test]
async fn unconfigured_exchange_prints_system_notice() {
    let conversation = Conversation::new("session_1_abcdefghi", 3);
    let mut terminal = Terminal::new(conversation);

    let role = terminal.exchange("hello").await.expect("exchange runs");

    assert_eq!(role, Some(Role::System));
    assert_eq!(terminal.printed, 2);
    assert!(!terminal.conversation.is_pending());
}

#[tokio::test]
async fn blank_input_is_ignored() {
    let mut terminal = Terminal::new(Conversation::new("session_1_abcdefghi", 3));
    assert_eq!(terminal.exchange("   ").await.expect("exchange runs"), None);
    assert_eq!(terminal.printed, 0);
}
