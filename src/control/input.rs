/// Discrete events delivered by whatever captures user input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    EngineToggle,
    Retry,
    Boost,
    WindowResize { width: f64, height: f64 },
}
