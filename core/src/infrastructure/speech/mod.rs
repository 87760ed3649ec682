mod tracing_speech;

pub use tracing_speech::TracingSpeechOutput;
