/// Identifier attached to every outgoing request so completions can be matched
/// against the request that is still wanted.
pub type RequestId = u64;

/// Data that originates from a network call and passes through loading,
/// success and failure phases before it is rendered.
#[derive(Debug, Clone, PartialEq)]
pub enum RemoteResource<T, E> {
    Idle,
    Loading {
        request: RequestId,
    },
    Success(T),
    Failure(E),
}

impl<T, E> Default for RemoteResource<T, E> {
    fn default() -> Self {
        RemoteResource::Idle
    }
}

/// Inputs to [`RemoteResource::transition`].
#[derive(Debug, Clone, PartialEq)]
pub enum RemoteEvent<T, E> {
    Started(RequestId),
    Resolved {
        request: RequestId,
        outcome: Result<T, E>,
    },
}

impl<T, E> RemoteResource<T, E> {
    /// Pure reducer. A resolution for any request other than the one in flight
    /// leaves the resource untouched.
    pub fn transition(self, event: RemoteEvent<T, E>) -> Self {
        match event {
            RemoteEvent::Started(request) => RemoteResource::Loading { request },
            RemoteEvent::Resolved { request, outcome } => {
                if self.in_flight() != Some(request) {
                    return self;
                }
                match outcome {
                    Ok(data) => RemoteResource::Success(data),
                    Err(reason) => RemoteResource::Failure(reason),
                }
            }
        }
    }

    /// In-place form of [`transition`](Self::transition). Returns whether the
    /// resource changed phase or payload.
    pub fn apply(&mut self, event: RemoteEvent<T, E>) -> bool {
        let accepted = match &event {
            RemoteEvent::Resolved { request, .. } => self.in_flight() == Some(*request),
            RemoteEvent::Started(_) => true,
        };
        if accepted {
            let current = std::mem::take(self);
            *self = current.transition(event);
        }
        accepted
    }

    pub fn in_flight(&self) -> Option<RequestId> {
        match self {
            RemoteResource::Loading { request } => Some(*request),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, RemoteResource::Loading { .. })
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            RemoteResource::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&E> {
        match self {
            RemoteResource::Failure(reason) => Some(reason),
            _ => None,
        }
    }
}
