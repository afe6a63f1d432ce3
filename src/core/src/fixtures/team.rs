use crate::error::{PicksError, PicksResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Clone, Default)]
pub struct TeamDirectory {
    names: HashMap<u32, String>,
}

#[derive(Deserialize)]
struct Bootstrap {
    teams: Vec<Team>,
}

impl TeamDirectory {
    pub fn new(teams: impl IntoIterator<Item = Team>) -> Self {
        TeamDirectory {
            names: teams.into_iter().map(|team| (team.id, team.name)).collect(),
        }
    }

    /// Builds the directory from the `bootstrap-static` payload.
    pub fn from_bootstrap(value: &Value) -> PicksResult<Self> {
        if !value.get("teams").is_some_and(Value::is_array) {
            return Err(PicksError::InvalidBootstrap("missing teams list".to_string()));
        }

        let bootstrap = Bootstrap::deserialize(value)?;

        Ok(Self::new(bootstrap.teams))
    }

    pub fn name(&self, id: u32) -> Option<&str> {
        self.names.get(&id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
