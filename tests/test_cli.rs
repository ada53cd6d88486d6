use assert_cmd::Command;
use predicates::prelude::*;
#[cfg(unix)]
use std::io::{BufRead, BufReader, Read};
#[cfg(unix)]
use std::process::Stdio;

fn demo() -> Command {
    let mut cmd = Command::cargo_bin("menu-demo").unwrap();
    cmd.env_remove("MENU_TITLE")
        .env_remove("MENU_ASK_ARGS")
        .env_remove("MENU_CLEAR_SCREEN")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_menu_is_listed_and_quit_exits_cleanly() {
    demo()
        .write_stdin("q\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("My App"))
        .stdout(predicate::str::contains("1. quit (exit, q) — Exit the program"))
        .stdout(predicate::str::contains("2. hello (hi) — Say hello"))
        .stdout(predicate::str::contains("7. cls — Clear the screen"))
        .stdout(predicate::str::contains("Exiting..."));
}

#[test]
fn test_greeting_by_prefix_then_quit() {
    demo()
        .write_stdin("hel\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Hello!"));
}

#[test]
fn test_action_reads_its_own_input_from_stdin() {
    demo()
        .write_stdin("add\n2\n40\nq\n")
        .timeout(std::time::Duration::from_secs(10))
        .assert()
        .success()
        .stdout(predicate::str::contains("First number: "))
        .stdout(predicate::str::contains("Second number: "))
        .stdout(predicate::str::contains("Result: 42"))
        .stdout(predicate::str::contains("Exiting..."));
}

#[test]
fn test_triangle_uses_prompted_size() {
    demo()
        .write_stdin("tri\n3\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("size [5]: "))
        .stdout(predicate::str::contains("* * *"))
        .stdout(predicate::str::contains("* * * *").not());
}

#[test]
fn test_ambiguous_prefix_is_reported() {
    demo()
        .write_stdin("c\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ambiguous: Circle, cls"));
}

#[test]
fn test_once_with_unknown_choice_succeeds() {
    demo()
        .arg("--once")
        .write_stdin("nothing\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid choice"));
}

#[test]
fn test_once_with_failing_option_fails() {
    demo()
        .arg("--once")
        .write_stdin("add\nx\n1\n")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Error: invalid number: \"x\""));
}

#[test]
fn test_title_flag_and_no_args() {
    demo()
        .args(["--title", "Shapes", "--no-args"])
        .write_stdin("square\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Shapes"))
        .stdout(predicate::str::contains("size [").not())
        .stdout(predicate::str::contains(" *  *  *  *  * "));
}

#[cfg(unix)]
#[test]
fn test_interrupt_prints_farewell_and_exits_zero() {
    let mut child = std::process::Command::new(env!("CARGO_BIN_EXE_menu-demo"))
        .env("NO_COLOR", "1")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .unwrap();

    // Held open so the menu cannot see end of input before the signal lands.
    let _stdin = child.stdin.take().unwrap();

    // Wait until the menu is waiting for a choice; the handler is installed by then.
    let mut stdout = BufReader::new(child.stdout.take().unwrap());
    let mut line = String::new();
    while !line.contains("Choose option") {
        line.clear();
        assert_ne!(stdout.read_line(&mut line).unwrap(), 0, "menu never prompted");
    }

    let killed = std::process::Command::new("kill")
        .args(["-INT", &child.id().to_string()])
        .status()
        .unwrap();
    assert!(killed.success());

    let status = child.wait().unwrap();
    let mut rest = String::new();
    stdout.read_to_string(&mut rest).unwrap();

    assert_eq!(status.code(), Some(0));
    assert!(rest.contains("Exiting..."));
}
