//! Loading / data / error bookkeeping for one kind of request.
//!
//! A [`RequestState`] is owned by exactly one panel. It knows nothing about
//! rendering: the shell reads `data()`, `error()` and `is_loading()` when it
//! draws, and may [`subscribe`](RequestState::subscribe) to state changes.

use crate::error::{ErrorCode, FetchError, RequestError};
use crate::normalize::{normalize_error, RequestName};

/// Where a [`RequestState`] currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestStatus {
    /// Nothing has been asked for yet.
    Idle,
    Loading,
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestOptions {
    /// Used to pick error wording; `None` gets generic messages.
    pub name: Option<RequestName>,
    /// Queue a first run as soon as the state is created.
    pub immediate: bool,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            name: None,
            immediate: true,
        }
    }
}

impl RequestOptions {
    pub fn named(name: RequestName) -> Self {
        Self {
            name: Some(name),
            ..Default::default()
        }
    }

    /// Do not run until something calls [`RequestState::request`] or `run`.
    pub fn deferred(mut self) -> Self {
        self.immediate = false;
        self
    }
}

/// Identifies one started call. Only the most recent ticket may complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTicket(u64);

impl RequestTicket {
    pub fn sequence(&self) -> u64 {
        self.0
    }
}

/// Notification sent to observers registered with
/// [`RequestState::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestEvent {
    Started(RequestTicket),
    Succeeded(RequestTicket),
    Failed(RequestTicket, ErrorCode),
    /// A response arrived for a ticket that a newer call had superseded.
    Discarded(RequestTicket),
}

type Observer = Box<dyn FnMut(RequestEvent)>;

pub struct RequestState<T> {
    name: Option<RequestName>,
    data: Option<T>,
    error: Option<RequestError>,
    status: RequestStatus,
    pending: bool,
    latest: u64,
    /// Ticket of the last call whose outcome was recorded.
    settled: u64,
    observers: Vec<Observer>,
}

impl<T> RequestState<T> {
    pub fn new(options: RequestOptions) -> Self {
        Self {
            name: options.name,
            data: None,
            error: None,
            status: if options.immediate {
                RequestStatus::Loading
            } else {
                RequestStatus::Idle
            },
            pending: options.immediate,
            latest: 0,
            settled: 0,
            observers: Vec::new(),
        }
    }

    pub fn name(&self) -> Option<RequestName> {
        self.name
    }

    /// Most recent successful result. Kept while a newer call is loading or
    /// after it fails.
    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn error(&self) -> Option<&RequestError> {
        self.error.as_ref()
    }

    pub fn status(&self) -> RequestStatus {
        self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == RequestStatus::Loading
    }

    /// Whether a run has been queued but not executed yet.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn subscribe<F>(&mut self, observer: F)
    where
        F: FnMut(RequestEvent) + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    /// Queue a run: show loading now, execute on the next [`poll`](Self::poll).
    pub fn request(&mut self) {
        self.status = RequestStatus::Loading;
        self.error = None;
        self.pending = true;
    }

    /// Execute the queued run, if there is one. Returns whether `call` ran.
    pub fn poll<F>(&mut self, call: F) -> bool
    where
        F: FnOnce() -> Result<T, FetchError>,
    {
        if !self.pending {
            return false;
        }
        self.run(call);
        true
    }

    /// Execute `call` right away and record its outcome.
    pub fn run<F>(&mut self, call: F)
    where
        F: FnOnce() -> Result<T, FetchError>,
    {
        let ticket = self.begin();
        let result = call();
        self.finish(ticket, result);
    }

    pub fn refetch<F>(&mut self, call: F)
    where
        F: FnOnce() -> Result<T, FetchError>,
    {
        self.run(call);
    }

    /// Enter loading for a new call and hand out its ticket.
    pub fn begin(&mut self) -> RequestTicket {
        self.pending = false;
        self.latest += 1;
        self.status = RequestStatus::Loading;
        self.error = None;

        let ticket = RequestTicket(self.latest);
        self.notify(RequestEvent::Started(ticket));
        ticket
    }

    /// Record the outcome of the call identified by `ticket`.
    ///
    /// Returns `false` when a newer call has started since, or when this
    /// ticket was already finished; the result is then dropped and the state
    /// is left as it is.
    pub fn finish(&mut self, ticket: RequestTicket, result: Result<T, FetchError>) -> bool {
        if ticket.0 != self.latest {
            tracing::warn!(
                request = ?self.name,
                ticket = ticket.0,
                latest = self.latest,
                "discarding stale response"
            );
            self.notify(RequestEvent::Discarded(ticket));
            return false;
        }
        if ticket.0 == self.settled {
            tracing::warn!(
                request = ?self.name,
                ticket = ticket.0,
                "discarding second response for a finished call"
            );
            self.notify(RequestEvent::Discarded(ticket));
            return false;
        }
        self.settled = ticket.0;

        match result {
            Ok(data) => {
                self.data = Some(data);
                self.error = None;
                self.status = RequestStatus::Success;
                self.notify(RequestEvent::Succeeded(ticket));
            }
            Err(failure) => {
                let error = normalize_error(failure, self.name);
                error.log();
                let code = error.code();
                self.error = Some(error);
                self.status = RequestStatus::Error;
                self.notify(RequestEvent::Failed(ticket, code));
            }
        }
        true
    }

    fn notify(&mut self, event: RequestEvent) {
        for observer in &mut self.observers {
            observer(event);
        }
    }
}
