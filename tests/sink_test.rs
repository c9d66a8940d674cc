use anyhow::Result;
use small_greet::{FileSink, Greeter, JsonSink, MemorySink};
use tempfile::TempDir;

#[test]
fn file_sink_appends_line_terminated_greetings() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("greetings.txt");
    let sink = FileSink::new(&path);

    let greeter = Greeter::new(&sink);
    greeter.say_hello()?;
    greeter.say_hello()?;

    let content = std::fs::read_to_string(&path)?;
    assert_eq!(content, "Hello World\nHello World\n");
    Ok(())
}

#[test]
fn file_sink_creates_missing_parent_directories() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("nested/deeper/greetings.txt");

    Greeter::new(FileSink::new(&path)).say_hello()?;

    assert_eq!(std::fs::read_to_string(&path)?, "Hello World\n");
    Ok(())
}

#[test]
fn json_sink_forwards_an_encoded_greeting() -> Result<()> {
    let capture = MemorySink::new();

    Greeter::new(JsonSink::new(&capture)).say_hello()?;

    let line = capture.last_message().unwrap();
    let value: serde_json::Value = serde_json::from_str(&line)?;
    assert_eq!(value["message"], "Hello World");
    Ok(())
}
