use alloc::string::String;

pub use fallback::*;

mod fallback;

pub trait WordPicker {
    fn pick(self) -> String;
}
