//! End-to-end sessions against the bundled filesystem.

use std::sync::Arc;
use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;
use termfolio::{
    Key, LineKind, NavRequest, OutputLine, OutputLineData, RecordingNavigator, Session,
    TerminalConfig, VirtualFs, VirtualPath,
};

const PROMPT: &str = "user@dc-portfolio:~";

fn session_with(fs: VirtualFs) -> Session {
    let config = TerminalConfig {
        banner: false,
        ..TerminalConfig::default()
    };
    Session::with_rng(Arc::new(fs), config, StdRng::seed_from_u64(2024)).unwrap()
}

fn builtin_session() -> Session {
    session_with(VirtualFs::builtin().unwrap())
}

fn lines(session: &Session) -> Vec<OutputLine> {
    session.state().scrollback().to_vec()
}

#[test]
fn test_walkthrough() {
    let nav = RecordingNavigator::new();
    let mut session = builtin_session();

    session.submit_line("ls", &nav);
    let out = lines(&session);
    assert_eq!(out[0], OutputLine::command(PROMPT, "ls"));
    assert_eq!(
        out[1].text_content(),
        "about.txt  resume.pdf  projects/  socials/  secrets/"
    );

    session.submit_line("cd projects", &nav);
    assert_eq!(session.state().current_path().display(), "~/projects");
    assert_eq!(lines(&session).len(), 3, "cd prints nothing but its echo");
    assert_eq!(session.prompt(), "user@dc-portfolio:~/projects");

    session.submit_line("cd ..", &nav);
    assert!(session.state().current_path().is_root());

    session.submit_line("cat about.txt", &nav);
    let last = lines(&session).pop().unwrap();
    assert_eq!(last.kind(), LineKind::Text);
    assert!(last.text_content().starts_with("Daniel Castleberry.\n"));

    session.submit_line("open resume.pdf", &nav);
    assert_eq!(
        lines(&session).pop().unwrap(),
        OutputLine::success("Opening resume.pdf...")
    );
    assert_eq!(nav.take(), vec![NavRequest::Route("/resume.pdf".to_string())]);

    session.submit_line("nonsense", &nav);
    assert_eq!(
        lines(&session).pop().unwrap(),
        OutputLine::error("Command not found: nonsense")
    );

    assert_eq!(
        session.state().history().to_vec(),
        vec![
            "ls",
            "cd projects",
            "cd ..",
            "cat about.txt",
            "open resume.pdf",
            "nonsense"
        ]
    );
}

#[test]
fn test_open_external_link() {
    let nav = RecordingNavigator::new();
    let mut session = builtin_session();
    session.submit_line("cd socials", &nav);
    session.submit_line("open github", &nav);
    session.submit_line("open email", &nav);
    assert_eq!(
        nav.take(),
        vec![
            NavRequest::External("https://github.com/TheTrueSergeant1".to_string()),
            NavRequest::External("mailto:dancastlbusiness@gmail.com".to_string()),
        ]
    );
}

#[test]
fn test_echo_carries_the_directory_it_ran_in() {
    let nav = RecordingNavigator::new();
    let mut session = builtin_session();

    session.submit_line("cd socials", &nav);
    session.submit_line("ls", &nav);
    let out = lines(&session);
    assert_eq!(out[0], OutputLine::command(PROMPT, "cd socials"));
    assert_eq!(
        out[1],
        OutputLine::command("user@dc-portfolio:~/socials", "ls")
    );

    session.submit_line("cd ..", &nav);
    assert_eq!(session.prompt(), PROMPT);
}

#[test]
fn test_cd_child_then_parent_returns_for_every_directory() {
    let fs = VirtualFs::builtin().unwrap();
    let nav = RecordingNavigator::new();

    for dir in fs.directories() {
        let children: Vec<String> = fs
            .resolve(&dir)
            .unwrap()
            .iter()
            .filter(|(_, node)| node.is_directory())
            .map(|(name, _)| name.to_string())
            .collect();

        for child in children {
            let mut session = session_with(fs.clone());
            for segment in dir.components() {
                session.submit_line(&format!("cd {segment}"), &nav);
            }
            assert_eq!(session.state().current_path(), &dir);

            session.submit_line(&format!("cd {child}"), &nav);
            assert_eq!(session.state().current_path(), &dir.join(child.as_str()));
            session.submit_line("cd ..", &nav);
            assert_eq!(session.state().current_path(), &dir);
        }
    }
    assert!(nav.requests().is_empty());
}

#[test]
fn test_ls_preserves_insertion_order_everywhere() {
    let fs = VirtualFs::builtin().unwrap();
    let nav = RecordingNavigator::new();

    for dir in fs.directories() {
        let mut session = session_with(fs.clone());
        for segment in dir.components() {
            session.submit_line(&format!("cd {segment}"), &nav);
        }
        session.submit_line("ls", &nav);

        let expected: Vec<&str> = fs.children_names(&dir);
        let listing = lines(&session).pop().unwrap();
        match &listing.data {
            OutputLineData::Listing(entries) => {
                let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
                assert_eq!(names, expected, "listing of {dir}");
            }
            OutputLineData::Text(text) => {
                assert!(expected.is_empty());
                assert_eq!(text, "Directory is empty.");
            }
            other => panic!("unexpected ls output {other:?}"),
        }
    }
}

#[test]
fn test_cat_on_links_and_directories() {
    let nav = RecordingNavigator::new();
    let mut session = builtin_session();
    for name in ["resume.pdf", "projects", "socials"] {
        session.submit_line(&format!("cat {name}"), &nav);
        assert_eq!(
            lines(&session).pop().unwrap(),
            OutputLine::error(format!("cat: {name}: No such file"))
        );
    }
}

#[test]
fn test_clear_always_empties() {
    let nav = RecordingNavigator::new();
    let scripts: [&[&str]; 3] = [&[], &["help"], &["ls", "cd projects", "ls", "whoami"]];
    for script in scripts {
        let mut session = builtin_session();
        for line in script {
            session.submit_line(line, &nav);
        }
        session.history_up();
        session.submit_line("clear", &nav);
        assert!(session.state().scrollback().is_empty());
        assert_eq!(session.state().history_cursor(), None);
    }
}

#[test]
fn test_history_up_three_down_two_equals_up_one() {
    let nav = RecordingNavigator::new();
    let script = ["help", "ls", "whoami"];

    let mut a = builtin_session();
    let mut b = builtin_session();
    for line in script {
        a.submit_line(line, &nav);
        b.submit_line(line, &nav);
    }

    for _ in 0..3 {
        a.handle_key(Key::ArrowUp, &nav);
    }
    for _ in 0..2 {
        a.handle_key(Key::ArrowDown, &nav);
    }
    b.handle_key(Key::ArrowUp, &nav);

    assert_eq!(a.state().input(), b.state().input());
    assert_eq!(a.state().history_cursor(), b.state().history_cursor());
    assert_eq!(a.state().input(), "whoami");
}

#[test]
fn test_typing_with_tab_and_enter() {
    let nav = RecordingNavigator::new();
    let mut session = builtin_session();

    session.set_input("cd pro");
    session.handle_key(Key::Tab, &nav);
    assert_eq!(session.state().input(), "cd projects ");
    session.handle_key(Key::Enter, &nav);
    assert_eq!(
        session.state().current_path(),
        &VirtualPath::root().join("projects")
    );

    session.set_input("open home");
    session.handle_key(Key::Tab, &nav);
    session.handle_key(Key::Enter, &nav);
    assert_eq!(nav.take(), vec![NavRequest::Route("/homelab".to_string())]);
}

#[test]
fn test_deferred_output_fires_into_open_session() {
    let nav = RecordingNavigator::new();
    let mut session = builtin_session();

    session.set_input("matrix");
    let outcome = session.handle_key(Key::Enter, &nav);
    assert_eq!(outcome.timers.len(), 16);
    assert_eq!(outcome.timers[0].delay, Duration::from_millis(100));
    assert_eq!(outcome.timers[15].delay, Duration::from_millis(1600));

    for timer in &outcome.timers {
        assert!(session.fire(timer.id));
    }
    let out = lines(&session);
    assert_eq!(out.len(), 2 + 16);
    assert!(out[2..].iter().all(|line| line.kind() == LineKind::Matrix));
}

#[test]
fn test_exit_cancels_pending_output() {
    let nav = RecordingNavigator::new();
    let mut session = builtin_session();

    let timers = session.submit_line("sudo", &nav);
    session.submit_line("exit", &nav);
    assert_eq!(nav.take(), vec![NavRequest::Close]);
    assert!(session.is_closed());

    let before = lines(&session);
    assert!(!session.fire(timers[0].id));
    assert_eq!(lines(&session), before);
    assert_eq!(
        before.last().unwrap(),
        &OutputLine::text("[sudo] password for guest: ")
    );
}

#[test]
fn test_reopening_starts_fresh() {
    let nav = RecordingNavigator::new();
    let fs = Arc::new(VirtualFs::builtin().unwrap());

    let mut first = Session::new(fs.clone(), TerminalConfig::default()).unwrap();
    first.submit_line("cd projects", &nav);
    first.submit_line("exit", &nav);

    let second = Session::new(fs, TerminalConfig::default()).unwrap();
    assert!(second.state().current_path().is_root());
    assert!(second.state().history().is_empty());
    assert_eq!(second.state().scrollback().len(), 3);
}
