pub trait Logger {
    fn info(&self, message: String) -> ();
    fn error(&self, message: String) -> ();
}

/// Status lines to stdout, failures to stderr.
#[derive(Default)]
pub struct StderrLogger;
impl Logger for StderrLogger {
    fn info(&self, message: String) -> () {
        println!("{}", message);
    }
    fn error(&self, message: String) -> () {
        eprintln!("{}", message);
    }
}

#[derive(Default)]
pub struct NoopLogger;
impl Logger for NoopLogger {
    fn info(&self, _message: String) -> () {
        ();
    }
    fn error(&self, _message: String) -> () {
        ();
    }
}

/// Captures lines for assertions in tests.
#[cfg(test)]
#[derive(Default)]
pub struct MemoryLogger {
    pub infos: std::sync::Mutex<Vec<String>>,
    pub errors: std::sync::Mutex<Vec<String>>,
}

#[cfg(test)]
impl Logger for MemoryLogger {
    fn info(&self, message: String) -> () {
        self.infos.lock().unwrap().push(message);
    }
    fn error(&self, message: String) -> () {
        self.errors.lock().unwrap().push(message);
    }
}
