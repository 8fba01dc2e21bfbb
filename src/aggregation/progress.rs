/// One progress report from a running pipeline.
#[derive(Debug, Clone, PartialEq)]
pub enum Update {
    /// `(completed, total)` units of the current step.
    Count(usize, usize),
    Status(String),
}

impl std::fmt::Display for Update {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Count(done, total) => write!(f, "{}/{}", done, total),
            Self::Status(status) => write!(f, "{}", status),
        }
    }
}

/// A one-way sink for progress updates.
pub trait Progress {
    fn update(&mut self, update: Update);
    fn status(&mut self, status: impl Into<String>)
    where
        Self: Sized,
    {
        self.update(Update::Status(status.into()));
    }
}

impl<F> Progress for F
where
    F: FnMut(Update),
{
    fn update(&mut self, update: Update) {
        self(update)
    }
}

/// Forwards status updates to the log. Counts go to the debug log only.
#[derive(Debug, Default, Clone, Copy)]
pub struct Logged;

impl Progress for Logged {
    fn update(&mut self, update: Update) {
        match update {
            Update::Status(_) => log::info!("{}", update),
            Update::Count(..) => log::debug!("{}", update),
        }
    }
}
