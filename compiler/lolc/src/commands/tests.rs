use pretty_assertions::assert_eq;

use super::RunOptions;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_owned()).collect()
}

#[test]
fn path_only() {
    assert_eq!(
        RunOptions::parse(&args(&["prog.lol"])),
        Ok(RunOptions {
            path: "prog.lol".to_owned(),
            max_depth: None,
        })
    );
}

#[test]
fn max_depth_in_any_position() {
    let expected = Ok(RunOptions {
        path: "prog.lol".to_owned(),
        max_depth: Some(64),
    });
    assert_eq!(
        RunOptions::parse(&args(&["--max-depth=64", "prog.lol"])),
        expected
    );
    assert_eq!(
        RunOptions::parse(&args(&["prog.lol", "--max-depth=64"])),
        expected
    );
}

#[test]
fn rejects_bad_arguments() {
    assert_eq!(
        RunOptions::parse(&[]),
        Err("missing file path".to_owned())
    );
    assert_eq!(
        RunOptions::parse(&args(&["a.lol", "--max-depth=lots"])),
        Err("invalid --max-depth value 'lots'".to_owned())
    );
    assert_eq!(
        RunOptions::parse(&args(&["a.lol", "--fast"])),
        Err("unknown option '--fast'".to_owned())
    );
    assert_eq!(
        RunOptions::parse(&args(&["a.lol", "b.lol"])),
        Err("unexpected argument 'b.lol'".to_owned())
    );
}
