use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::{DomainError, ReplacementMap};

/// The five strings that identify a project.
///
/// A template carries placeholder values for each field; customization swaps
/// them for the values of the new project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub package_name: String,
    pub author: String,
    pub email: String,
    pub description: String,
    pub github_username: String,
}

impl Identity {
    pub fn new(
        package_name: impl Into<String>,
        author: impl Into<String>,
        email: impl Into<String>,
        description: impl Into<String>,
        github_username: impl Into<String>,
    ) -> Self {
        Self {
            package_name: package_name.into(),
            author: author.into(),
            email: email.into(),
            description: description.into(),
            github_username: github_username.into(),
        }
    }

    /// Fields in replacement order, labelled.
    pub fn fields(&self) -> [(&'static str, &str); 5] {
        [
            ("package_name", self.package_name.as_str()),
            ("author", self.author.as_str()),
            ("email", self.email.as_str()),
            ("description", self.description.as_str()),
            ("github_username", self.github_username.as_str()),
        ]
    }
}

impl ReplacementMap {
    /// Build the map that turns `template` into `project`.
    ///
    /// Order: package name, author, email, description, GitHub username.
    /// Fields whose template and project values are equal are skipped. When
    /// two template fields share a value the later field's project value wins
    /// and a warning is logged.
    pub fn between(template: &Identity, project: &Identity) -> Result<Self, DomainError> {
        let mut map = ReplacementMap::new();
        for ((field, from), (_, to)) in template.fields().into_iter().zip(project.fields()) {
            if from == to {
                continue;
            }
            if let Some(previous) = map.set(from, to)? {
                if previous != to {
                    warn!(
                        field,
                        key = from,
                        dropped = %previous,
                        kept = to,
                        "template fields share a value; the later field wins"
                    );
                }
            }
        }
        Ok(map)
    }
}
