use crate::key::Key;

/// A game driven by a frontend at a fixed tick rate.
///
/// The frontend polls input, forwards key events, then asks the app to
/// advance one tick and fill `screen` (RGB24, `width * height * 3` bytes).
pub trait App {
    fn init(&mut self);
    fn update(&mut self, screen: &mut [u8]);
    fn handle_key_event(&mut self, key: Key, is_down: bool);
    fn should_exit(&self) -> bool;
    fn exit(&mut self);

    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn scale(&self) -> u32;
    /// Target ticks per second.
    fn fps(&self) -> u32;
    fn title(&self) -> String;
}
