//! Session history mirror.
//!
//! `wry` hides the engine's back/forward list, so the content view keeps its
//! own copy. Traversals the shell issues are announced with
//! [`SessionHistory::begin`]. Every document the content view shows is
//! applied with [`SessionHistory::commit`], together with the
//! [`NavigationKind`] the page itself reports, so a link back to an earlier
//! URL is never mistaken for a traversal.
//!
//! Same-document navigations (fragments, `pushState`) are not mirrored. The
//! mirror then holds fewer entries than the engine, which can leave a
//! button disabled but never enables one with nothing behind it.

/// A navigation the shell asked the engine to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Traversal {
    Load,
    Back,
    Forward,
}

/// How the engine reached a document, from the page's Navigation Timing
/// entry (`PerformanceNavigationTiming.type`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationKind {
    /// A new entry: link, form, `location` assignment or a shell load.
    Navigate,
    Reload,
    /// Moved along existing entries.
    BackForward,
}

impl NavigationKind {
    /// Parse a timing type. `prerender` and unknown values count as
    /// `Navigate`, which at worst leaves Forward disabled.
    pub fn from_timing_type(value: &str) -> Self {
        match value {
            "reload" => Self::Reload,
            "back_forward" => Self::BackForward,
            _ => Self::Navigate,
        }
    }
}

/// How a finished navigation changed the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commit {
    /// A new entry was appended; any forward entries were dropped.
    Pushed,
    /// The cursor moved back.
    Back,
    /// The cursor moved forward.
    Forward,
    /// The current entry was reloaded or replaced; nothing moved.
    Reloaded,
    /// The engine traversed to an entry the mirror does not hold.
    Unmatched,
}

#[derive(Debug, Clone, Default)]
pub struct SessionHistory {
    entries: Vec<String>,
    /// Index of the current entry. Meaningless while `entries` is empty.
    index: usize,
    pending: Option<Traversal>,
}

impl SessionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that the shell issued `traversal`. A later call supersedes an
    /// earlier one, as a new load supersedes an in-flight one in the engine.
    pub fn begin(&mut self, traversal: Traversal) {
        self.pending = Some(traversal);
    }

    /// Apply a finished navigation to `url`.
    ///
    /// The announced traversal is consumed by every commit, so one the engine
    /// ignored (e.g. `history.forward()` at the end of the list) cannot be
    /// applied to a later, unrelated navigation.
    pub fn commit(&mut self, url: &str, kind: NavigationKind) -> Commit {
        let pending = self.pending.take();

        if self.entries.is_empty() {
            self.entries.push(url.to_string());
            self.index = 0;
            return Commit::Pushed;
        }

        match kind {
            NavigationKind::Reload => {
                self.replace_current(url);
                Commit::Reloaded
            }
            // The engine replaces, rather than pushes, a navigation to the
            // URL it is already showing.
            NavigationKind::Navigate if self.entries[self.index] == url => Commit::Reloaded,
            NavigationKind::Navigate => {
                self.entries.truncate(self.index + 1);
                self.entries.push(url.to_string());
                self.index = self.entries.len() - 1;
                Commit::Pushed
            }
            NavigationKind::BackForward => match pending {
                Some(Traversal::Back) if self.can_go_back() => {
                    self.index -= 1;
                    self.replace_current(url);
                    Commit::Back
                }
                Some(Traversal::Forward) if self.can_go_forward() => {
                    self.index += 1;
                    self.replace_current(url);
                    Commit::Forward
                }
                _ => self.traverse_to(url),
            },
        }
    }

    pub fn can_go_back(&self) -> bool {
        !self.entries.is_empty() && self.index > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    /// URL of the current entry.
    #[cfg(test)]
    pub fn current(&self) -> Option<&str> {
        self.entries.get(self.index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// A traversal the shell did not issue (`history.go(n)` from script):
    /// move to the nearest entry with this URL, preferring the back side.
    fn traverse_to(&mut self, url: &str) -> Commit {
        let len = self.entries.len();
        for distance in 1..len {
            if let Some(i) = self.index.checked_sub(distance) {
                if self.entries[i] == url {
                    self.index = i;
                    return Commit::Back;
                }
            }
            let i = self.index + distance;
            if i < len && self.entries[i] == url {
                self.index = i;
                return Commit::Forward;
            }
        }
        Commit::Unmatched
    }

    /// Redirects can change the URL a traversal lands on.
    fn replace_current(&mut self, url: &str) {
        if self.entries[self.index] != url {
            self.entries[self.index] = url.to_string();
        }
    }
}
