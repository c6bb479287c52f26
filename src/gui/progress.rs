use std::sync::{ Arc, Mutex };
use crate::progress::Progress;

pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    done: usize,
    total: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>) -> Self {
        Self { status, done: 0, total: 0 }
    }
    fn set_status(&self, msg: impl Into<String>) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, groups: usize) {
        self.total = groups;
    }
    fn log(&mut self, msg: &str) {
        self.set_status(msg);
    }
    fn group_done(&mut self, syndicate: &str, priced: usize, items: usize) {
        self.done += 1;
        self.set_status(format!(
            "Loading prices... {syndicate}: {priced}/{items} priced ({}/{})",
            self.done, self.total
        ));
    }
    fn finish(&mut self) {
        self.set_status(format!("Ready ({}/{} syndicates)", self.done, self.total));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_tracks_groups() {
        let status = Arc::new(Mutex::new(String::new()));
        let mut p = GuiProgress::new(status.clone());
        p.begin(2);
        p.log("Loading prices...");
        assert_eq!(*status.lock().unwrap(), "Loading prices...");
        p.group_done("Cavia", 4, 6);
        assert_eq!(*status.lock().unwrap(), "Loading prices... Cavia: 4/6 priced (1/2)");
        p.group_done("The Hex", 0, 7);
        p.finish();
        assert_eq!(*status.lock().unwrap(), "Ready (2/2 syndicates)");
    }
}
