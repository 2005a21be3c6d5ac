use super::search::SearchError;

/// Aviso bloqueante para el usuario (window.alert)
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    Validation,
    SearchFailed(String),
}

impl Notice {
    /// Aviso correspondiente a un error, None si el error es silencioso
    pub fn from_error(error: &SearchError) -> Option<Self> {
        if !error.is_user_visible() {
            return None;
        }
        match error {
            SearchError::MissingLocations => Some(Notice::Validation),
            other => Some(Notice::SearchFailed(other.to_string())),
        }
    }

    pub fn message(&self) -> String {
        match self {
            Notice::Validation => SearchError::MissingLocations.to_string(),
            Notice::SearchFailed(reason) => format!("Search error: {}", reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notices_match_the_alert_texts() {
        let validation = Notice::from_error(&SearchError::MissingLocations).unwrap();
        assert_eq!(validation.message(), "Please enter both From and To locations.");

        let failed = Notice::from_error(&SearchError::Http { status: 500 }).unwrap();
        assert_eq!(failed.message(), "Search error: Search failed");

        assert_eq!(Notice::from_error(&SearchError::Busy), None);
        assert_eq!(Notice::from_error(&SearchError::Detached), None);
    }
}
