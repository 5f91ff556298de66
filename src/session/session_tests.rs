use super::*;
use std::io::Cursor;

fn no_pause() -> Config {
    Config {
        pause: false,
        ..Config::default()
    }
}

fn run_script(config: Config, script: &str) -> (Session, String) {
    let mut s = Session::new(config);
    let mut out = Vec::new();
    s.run(Cursor::new(script.as_bytes()), &mut out).unwrap();
    (s, String::from_utf8(out).unwrap())
}

fn names(s: &Session) -> Vec<&str> {
    s.items().iter().collect()
}

#[test]
fn test_new_with_initial_items() {
    let mut c = no_pause();
    c.items = vec!["a".into(), "b".into(), "a".into()];
    let s = Session::new(c);
    assert_eq!(names(&s), vec!["a", "b", "a"]);
    assert!(!s.config().pause);
}

#[test]
fn test_handle_scenario() {
    let mut s = Session::default();
    assert_eq!(s.handle(Request::RemoveFront), Outcome::EmptyList);
    assert_eq!(s.handle(Request::AddFront("apple".into())), Outcome::Added);
    assert_eq!(s.handle(Request::AddFront("banana".into())), Outcome::Added);
    assert_eq!(s.handle(Request::AddBack("cherry".into())), Outcome::Added);
    assert_eq!(
        s.handle(Request::Display),
        Outcome::Listing(vec!["banana".into(), "apple".into(), "cherry".into()])
    );
    assert_eq!(
        s.handle(Request::RemoveFront),
        Outcome::Removed("banana".into())
    );
    assert_eq!(
        s.handle(Request::RemoveBack),
        Outcome::Removed("cherry".into())
    );
    assert_eq!(
        s.handle(Request::RemoveByName("pear".into())),
        Outcome::NotFound("pear".into())
    );
    assert_eq!(
        s.handle(Request::RemoveByName("apple".into())),
        Outcome::Removed("apple".into())
    );
    assert_eq!(s.handle(Request::Display), Outcome::Listing(vec![]));
    assert_eq!(
        s.handle(Request::RemoveByName("apple".into())),
        Outcome::EmptyList
    );
    assert_eq!(s.handle(Request::Exit), Outcome::Exit);
}

#[test]
fn test_request_new() {
    assert_eq!(
        Request::new(Command::AddBack, "x".into()),
        Request::AddBack("x".into())
    );
    assert_eq!(
        Request::new(Command::RemoveFront, "ignored".into()),
        Request::RemoveFront
    );
    assert_eq!(
        Request::new(Command::RemoveByName, String::new()),
        Request::RemoveByName(String::new())
    );
}

#[test]
fn test_write_outcome_messages() {
    let s = Session::default();
    let render = |o: Outcome| {
        let mut out = Vec::new();
        s.write_outcome(&o, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    };
    assert_eq!(render(Outcome::Added), "\nItem added.\n\n");
    assert_eq!(render(Outcome::Removed("a".into())), "\nItem removed.\n\n");
    assert_eq!(
        render(Outcome::EmptyList),
        "\nItem cannot be removed from an empty list.\n\n"
    );
    assert_eq!(
        render(Outcome::NotFound("a".into())),
        "\nItem was not found in list and could not be removed.\n\n"
    );
    assert_eq!(
        render(Outcome::Listing(vec!["a".into(), "b c".into()])),
        "\nCurrent inventory:\n  a\n  b c\n\n"
    );
    assert_eq!(render(Outcome::Exit), "");
}

#[test]
fn test_write_outcome_json() {
    let s = Session::new(Config {
        format: DisplayFormat::Json,
        ..Config::default()
    });
    let mut out = Vec::new();
    s.write_outcome(&Outcome::Listing(vec!["a".into(), "b".into()]), &mut out)
        .unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "\nCurrent inventory:\n[\n  \"a\",\n  \"b\"\n]\n\n"
    );
}

#[test]
fn test_run_menu_layout() {
    let (_, out) = run_script(no_pause(), "7\n");
    let expected = "================ Main Menu ================\n\
        \n\
        Add new item to inventory:\n  \
          (1) Add item to beginning of list\n  \
          (2) Add item to end of list\n\
        Remove item from inventory:\n  \
          (3) Remove item from beginning of list\n  \
          (4) Remove item from end of list\n  \
          (5) Remove item by name\n\
        Other:\n  \
          (6) See current inventory\n  \
          (7) Exit program\n\
        \n\
        -------------------------------------------\n\
        What would you like to do?\n\
        Please enter an option from 1-7: ";
    assert_eq!(out, expected);
}

#[test]
fn test_run_scenario() {
    let script = "1\napple\n1\nbanana\n2\ncherry\n3\n4\n6\n5\napple\n6\n7\n";
    let (s, out) = run_script(no_pause(), script);
    assert!(s.items().is_empty());
    assert_eq!(out.matches("Item added.").count(), 3);
    assert_eq!(out.matches("Item removed.").count(), 3);
    assert!(out.contains("\nCurrent inventory:\n  apple\n\n"));
    assert!(out.contains("\nCurrent inventory:\n\n"));
    assert_eq!(out.matches("Enter the item you'd like to add: ").count(), 3);
    assert_eq!(
        out.matches("Enter the item you'd like to remove: ").count(),
        1
    );
}

#[test]
fn test_run_invalid_choices() {
    let (s, out) = run_script(no_pause(), "0\nfoo\n\n8\n2\nx\n7\n");
    assert_eq!(names(&s), vec!["x"]);
    assert_eq!(out.matches("    Invalid choice, try again: ").count(), 4);
}

#[test]
fn test_run_item_name_verbatim() {
    let (s, _) = run_script(no_pause(), "2\n  Spaced Name \n2\n\n1\ncrlf\r\n7\n");
    assert_eq!(names(&s), vec!["crlf", "  Spaced Name ", ""]);
}

#[test]
fn test_run_remove_messages() {
    let (_, out) = run_script(no_pause(), "3\n4\n5\nfoo\n2\nbar\n5\nfoo\n7\n");
    assert_eq!(
        out.matches("Item cannot be removed from an empty list.")
            .count(),
        3
    );
    assert_eq!(
        out.matches("Item was not found in list and could not be removed.")
            .count(),
        1
    );
}

#[test]
fn test_run_pause() {
    let (s, out) = run_script(Config::default(), "2\nhammer\n\n6\n\n7\n");
    assert_eq!(names(&s), vec!["hammer"]);
    assert_eq!(
        out.matches("Press Enter to return to main menu.\n\n").count(),
        2
    );
}

#[test]
fn test_run_exit_does_not_pause() {
    let (_, out) = run_script(Config::default(), "7\n");
    assert!(!out.contains("Press Enter"));
}

#[test]
fn test_run_end_of_input() {
    // Input ending at any prompt terminates the session cleanly.
    let (s, _) = run_script(no_pause(), "");
    assert!(s.items().is_empty());
    let (s, _) = run_script(no_pause(), "2\nkept\n1");
    assert_eq!(names(&s), vec!["kept"]);
    let (s, _) = run_script(Config::default(), "2\nkept\n");
    assert_eq!(names(&s), vec!["kept"]);
}
