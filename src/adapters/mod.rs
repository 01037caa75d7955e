// Adapters layer: concrete sinks for the greeter.

pub mod stdout;
