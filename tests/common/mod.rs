use assert_cmd::Command;

pub fn vocab_cmd() -> Command {
    let mut cmd = Command::cargo_bin("vocab").unwrap();
    cmd.env_remove("VOCAB_ROOT");
    cmd.env_remove("VOCAB_LOG");
    cmd
}
