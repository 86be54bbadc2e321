/// Progress of a single remote load.
#[derive(Debug)]
pub enum LoadingState<T, E> {
    Loading,
    Failed(E),
    Loaded(T),
}

impl<T, E> Default for LoadingState<T, E> {
    fn default() -> Self {
        LoadingState::Loading
    }
}

impl<T, E> LoadingState<T, E> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadingState::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            LoadingState::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn loaded_mut(&mut self) -> Option<&mut T> {
        match self {
            LoadingState::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn failed(&self) -> Option<&E> {
        match self {
            LoadingState::Failed(err) => Some(err),
            _ => None,
        }
    }
}

impl<T, E> From<Result<T, E>> for LoadingState<T, E> {
    fn from(res: Result<T, E>) -> Self {
        match res {
            Ok(value) => LoadingState::Loaded(value),
            Err(err) => LoadingState::Failed(err),
        }
    }
}
