//! Content provider wrapper that records every call it forwards.

use std::sync::atomic::{AtomicUsize, Ordering};

use chop_config::{Fragments, Scope, SectionContentProvider};
use parking_lot::Mutex;

/// Arguments of one [`SectionContentProvider::files`] call.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FilesCall {
    /// Scope that was requested.
    pub scope: Scope,
    /// Whether unspecified files were requested.
    pub include_unspecified: bool,
    /// Host the call was made for, if any.
    pub host: Option<String>,
}

/// Wraps a provider whose hosts are named by `str`, recording calls.
#[derive(Debug, Default)]
pub struct RecordingProvider<P> {
    inner: P,
    section_calls: AtomicUsize,
    files_calls: Mutex<Vec<FilesCall>>,
}

impl<P> RecordingProvider<P> {
    /// Wrap `inner`.
    #[must_use]
    pub const fn new(inner: P) -> Self {
        Self {
            inner,
            section_calls: AtomicUsize::new(0),
            files_calls: Mutex::new(Vec::new()),
        }
    }

    /// Number of section accessor calls forwarded so far.
    #[must_use]
    pub fn section_calls(&self) -> usize {
        self.section_calls.load(Ordering::SeqCst)
    }

    /// Every `files` call forwarded so far, in call order.
    #[must_use]
    pub fn files_calls(&self) -> Vec<FilesCall> {
        self.files_calls.lock().clone()
    }

    fn section<T>(&self, value: T) -> T {
        self.section_calls.fetch_add(1, Ordering::SeqCst);
        value
    }
}

impl<P: SectionContentProvider<Host = str>> SectionContentProvider for RecordingProvider<P> {
    type Host = str;

    fn remote_servers(&self) -> Option<String> {
        self.section(self.inner.remote_servers())
    }

    fn settings(&self, host: Option<&str>) -> Option<String> {
        self.section(self.inner.settings(host))
    }

    fn users(&self) -> Option<String> {
        self.section(self.inner.users())
    }

    fn quotas(&self) -> Option<String> {
        self.section(self.inner.quotas())
    }

    fn profiles(&self) -> Option<String> {
        self.section(self.inner.profiles())
    }

    fn host_macros(&self, host: &str) -> Option<String> {
        self.section(self.inner.host_macros(host))
    }

    fn host_ports(&self, host: &str) -> Option<String> {
        self.section(self.inner.host_ports(host))
    }

    fn host_coordination_service(&self, host: &str) -> Option<String> {
        self.section(self.inner.host_coordination_service(host))
    }

    fn files(&self, scope: Scope, include_unspecified: bool, host: Option<&str>) -> Fragments {
        self.files_calls.lock().push(FilesCall {
            scope,
            include_unspecified,
            host: host.map(str::to_owned),
        });
        self.inner.files(scope, include_unspecified, host)
    }
}
