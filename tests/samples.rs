//! Worked contest samples run through the same parse-then-solve path the
//! binaries use.

use training_archive::problems::{beads, friday, gift1, milk, ride, skidesign};

#[test]
fn beads_sample() {
    let input = beads::Input::parse("29\nwwwbbrwrbrbrrbrbrwrwwrbwrwrrb\n");
    assert_eq!(beads::solve(&input), 11);
}

#[test]
fn friday_sample() {
    let input = friday::Input::parse("20\n");
    assert_eq!(friday::solve(&input).to_string(), "36 33 34 33 35 35 34");
}

#[test]
fn gift1_sample() {
    let text = "5\n\
        dave\nlaura\nowen\nvick\namr\n\
        dave\n200 3\nlaura\nowen\nvick\n\
        owen\n500 1\ndave\n\
        amr\n150 2\nvick\nowen\n\
        laura\n0 2\namr\nvick\n\
        vick\n0 0\n";

    let input = gift1::Input::parse(text);
    let report: Vec<String> = gift1::solve(&input)
        .iter()
        .map(|balance| balance.to_string())
        .collect();

    assert_eq!(
        report,
        ["dave 302", "laura 66", "owen -359", "vick 141", "amr -150"]
    );
}

#[test]
fn milk_sample() {
    let input = milk::Input::parse("100 5\n5 20\n9 40\n3 10\n8 80\n6 30\n");
    assert_eq!(milk::solve(&input), 630);
}

#[test]
fn ride_samples() {
    let go = ride::Input::parse("COMETQ\nHVNGAT\n");
    assert_eq!(ride::solve(&go).to_string(), "GO");

    let stay = ride::Input::parse("ABSTAR\nUSACO\n");
    assert_eq!(ride::solve(&stay).to_string(), "STAY");
}

#[test]
fn skidesign_sample() {
    let input = skidesign::Input::parse("5\n20 4 1 24 21\n");
    assert_eq!(skidesign::solve(&input), 18);
}
