// src/progress.rs
/// Progress reporting for a render pass.
/// Frontends (GUI/CLI) implement this to surface status while the board loads.
pub trait Progress {
    /// Called at the start with the number of syndicate groups.
    fn begin(&mut self, _groups: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one syndicate group has been priced.
    /// `priced` cards out of `items` catalog entries.
    fn group_done(&mut self, _syndicate: &str, _priced: usize, _items: usize) {}

    /// Called at the end of the pass.
    fn finish(&mut self) {}
}
