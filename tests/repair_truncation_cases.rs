mod support;

use backtick_guard::{RepairOptions, repair};
use pretty_assertions::assert_eq;
use support::{ZWSP, ticked, xs};

fn check(cases: &[(String, String)]) {
    let opts = RepairOptions::default();
    for (message, expected) in cases {
        let fixed = repair(message);
        assert_eq!(&fixed, expected, "input {message:?}");
        support::assert_surface_safe(&fixed, &opts);
    }
}

#[test]
fn short_commits_are_ignored() {
    assert_eq!(repair("feat: short commit"), "feat: short commit");
    assert_eq!(
        repair("feat: :technologist: `short inline`"),
        "feat: :technologist: `short inline`"
    );
}

#[test]
fn long_commits_without_inline_code_are_ignored() {
    let message = "feat: long commit".repeat(20);
    assert_eq!(repair(&message), message);
}

#[test]
fn span_covering_the_whole_message_is_split_at_the_cut() {
    let mut cases = Vec::new();
    // Up to 50 units the surface keeps everything.
    for n in 44..=48 {
        cases.push((ticked(&xs(n)), ticked(&xs(n))));
    }
    for (n, tail) in [(49, 4), (50, 5), (51, 6), (52, 7)] {
        cases.push((
            ticked(&xs(n)),
            format!("{}{ZWSP}{}", ticked(&xs(45)), ticked(&xs(tail))),
        ));
    }
    check(&cases);
}

#[test]
fn short_span_after_the_cut_is_left_alone() {
    let mut cases = Vec::new();
    for n in 42..=50 {
        let message = format!("{}{}", xs(n), ticked("XX"));
        cases.push((message.clone(), message));
    }
    check(&cases);
}

#[test]
fn opening_backtick_near_the_cut() {
    let message = |n: usize| format!("{}{}", xs(n), ticked(&xs(6)));
    let mut cases = Vec::new();
    for n in 38..=42 {
        cases.push((message(n), message(n)));
    }
    cases.push((
        message(43),
        format!("{}{}{ZWSP}{}", xs(43), ticked("XX"), ticked("XXXX")),
    ));
    cases.push((
        message(44),
        format!("{}{}{ZWSP}{}", xs(44), ticked("X"), ticked("XXXXX")),
    ));
    // Backtick is the second-to-last visible unit.
    cases.push((message(45), format!("{}  {}", xs(45), ticked(&xs(6)))));
    // Backtick is the last visible unit.
    cases.push((message(46), format!("{} {}", xs(46), ticked(&xs(6)))));
    // Backtick is already past the cut.
    cases.push((message(47), message(47)));
    cases.push((message(48), message(48)));
    check(&cases);
}

#[test]
fn unclosed_spans_are_closed_before_simulating_the_cut() {
    let open = |n: usize| format!("{}`{}", xs(n), xs(36));
    let mut cases = vec![(
        "whoops, `i forgot to close this".to_string(),
        "whoops, `i forgot to close this`".to_string(),
    )];
    for n in 9..=12 {
        cases.push((open(n), format!("{}{}", xs(n), ticked(&xs(36)))));
    }
    // 50 units fit, but the closing backtick makes it 51.
    for (n, inside, tail) in [(13, 32, 4), (14, 31, 5), (15, 30, 6), (16, 29, 7), (20, 25, 11)] {
        cases.push((
            open(n),
            format!("{}{}{ZWSP}{}", xs(n), ticked(&xs(inside)), ticked(&xs(tail))),
        ));
    }
    // Balanced within the visible part, open only after it.
    cases.push((open(51), format!("{}{}", xs(51), ticked(&xs(36)))));
    check(&cases);
}

#[test]
fn repaired_messages_are_stable() {
    for message in [
        ticked(&xs(49)),
        format!("{}{}", xs(45), ticked(&xs(6))),
        format!("{}`{}", xs(20), xs(36)),
    ] {
        let once = repair(&message);
        assert_eq!(repair(&once), once);
    }
}
