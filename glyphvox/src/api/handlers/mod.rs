pub mod health;
pub mod ocr;
pub mod tts;

pub use health::health_check;
pub use ocr::recognize_image;
pub use tts::synthesize_speech;
