use anyhow::Result;
use small_greet::{GreetEngine, Greeter, MemorySink};

#[test]
fn greeting_reaches_the_injected_sink() -> Result<()> {
    let sink = MemorySink::new();

    Greeter::new(&sink).say_hello()?;

    assert_eq!(sink.last_message().as_deref(), Some("Hello World"));
    Ok(())
}

#[test]
fn each_call_emits_independently() -> Result<()> {
    let sink = MemorySink::new();
    let greeter = Greeter::new(&sink);

    greeter.say_hello()?;
    greeter.say_hello()?;

    assert_eq!(sink.messages(), vec!["Hello World", "Hello World"]);
    Ok(())
}

#[test]
fn engine_repeats_the_greeting() -> Result<()> {
    let sink = MemorySink::new();
    let engine = GreetEngine::new_with_repeat(Greeter::new(&sink), 3);

    let count = engine.run()?;

    assert_eq!(count, 3);
    let messages = sink.messages();
    assert_eq!(messages.len(), 3);
    assert!(messages.iter().all(|m| m == "Hello World"));
    Ok(())
}

#[test]
fn engine_defaults_to_a_single_greeting() -> Result<()> {
    let sink = MemorySink::new();
    let engine = GreetEngine::new(Greeter::new(&sink));

    assert_eq!(engine.run()?, 1);
    assert_eq!(sink.messages(), vec!["Hello World"]);
    Ok(())
}
