//! In-memory authorization authority.
//!
//! Behaves like vCenter's `AuthorizationManager` for the role calls: ids are
//! assigned sequentially, names are unique, built-in roles cannot be changed
//! and removal honors `fail_if_used`. Failures use the same fault types the
//! real server returns.

use std::collections::HashSet;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use crate::error::{ClientError, Result};
use crate::manager::AuthorizationManager;
use crate::models::{AuthorizationRole, Description};
use crate::privileges;

const FAKE_URL: &str = "memory://AuthorizationManager";

#[derive(Debug)]
struct State {
    roles: Vec<AuthorizationRole>,
    next_id: i32,
    in_use: HashSet<i32>,
    unavailable: bool,
}

/// A substitutable fake of the remote role store.
#[derive(Debug)]
pub struct InMemoryAuthorizationManager {
    state: Mutex<State>,
    latency: Option<Duration>,
    list_calls: AtomicUsize,
}

impl Default for InMemoryAuthorizationManager {
    fn default() -> Self {
        Self::new()
    }
}

fn system_role(id: i32, name: &str, label: &str, privileges: &[&str]) -> AuthorizationRole {
    AuthorizationRole {
        role_id: id,
        system: true,
        name: name.to_string(),
        info: Some(Description {
            label: label.to_string(),
            summary: String::new(),
        }),
        privilege: privileges.iter().map(|p| p.to_string()).collect(),
    }
}

fn fault(status: u16, type_name: &str, message: String) -> ClientError {
    ClientError::ApiError {
        status,
        url: FAKE_URL.to_string(),
        fault: Some(type_name.to_string()),
        message,
    }
}

impl InMemoryAuthorizationManager {
    /// A store seeded with the vSphere built-in roles.
    pub fn new() -> Self {
        let roles = vec![
            system_role(-1, "Admin", "Administrator", privileges::all()),
            system_role(
                -2,
                "ReadOnly",
                "Read-only",
                &["System.Anonymous", "System.Read", "System.View"],
            ),
            system_role(-3, "View", "View", &["System.Anonymous", "System.View"]),
            system_role(-4, "Anonymous", "Anonymous", &["System.Anonymous"]),
            system_role(-5, "NoAccess", "No access", &[]),
        ];

        Self {
            state: Mutex::new(State {
                roles,
                next_id: 1,
                in_use: HashSet::new(),
                unavailable: false,
            }),
            latency: None,
            list_calls: AtomicUsize::new(0),
        }
    }

    /// Id handed to the next created role.
    pub fn with_next_id(self, id: i32) -> Self {
        self.lock().next_id = id;
        self
    }

    /// Delay every call by `latency`.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Insert a custom role as if created earlier.
    pub fn with_role(self, id: i32, name: &str, privileges: &[&str]) -> Self {
        {
            let mut state = self.lock();
            state.roles.push(AuthorizationRole {
                role_id: id,
                system: false,
                name: name.to_string(),
                info: None,
                privilege: privileges.iter().map(|p| p.to_string()).collect(),
            });
            state.next_id = state.next_id.max(id + 1);
        }
        self
    }

    /// Pretend permissions reference `role_id`.
    pub fn mark_in_use(&self, role_id: i32) {
        self.lock().in_use.insert(role_id);
    }

    /// Make every call fail with HTTP 503 until switched back.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.lock().unavailable = unavailable;
    }

    /// Number of `role_list` calls served.
    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    /// Snapshot of the stored roles.
    pub fn roles(&self) -> Vec<AuthorizationRole> {
        self.lock().roles.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, State> {
        // A panic while holding the lock only happens in a failing test.
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    async fn pause(&self) {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
    }

    fn available(&self) -> Result<std::sync::MutexGuard<'_, State>> {
        let state = self.lock();
        if state.unavailable {
            return Err(ClientError::ApiError {
                status: 503,
                url: FAKE_URL.to_string(),
                fault: None,
                message: "Service Unavailable".to_string(),
            });
        }
        Ok(state)
    }

    fn check_privileges(privileges: &[String]) -> Result<()> {
        match privileges::unknown(privileges).first() {
            Some(unknown) => Err(fault(
                500,
                "InvalidArgument",
                format!("A specified parameter was not correct: privIds ({unknown})"),
            )),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl AuthorizationManager for InMemoryAuthorizationManager {
    async fn role_list(&self) -> Result<Vec<AuthorizationRole>> {
        self.pause().await;
        let state = self.available()?;
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        Ok(state.roles.clone())
    }

    async fn add_role(&self, name: &str, privileges: &[String]) -> Result<i32> {
        self.pause().await;
        let mut state = self.available()?;
        if name.is_empty() {
            return Err(fault(
                500,
                "InvalidArgument",
                "A specified parameter was not correct: name".to_string(),
            ));
        }
        if state.roles.iter().any(|r| r.name == name) {
            return Err(fault(
                500,
                "AlreadyExists",
                format!("The specified key, name, or identifier '{name}' already exists."),
            ));
        }
        Self::check_privileges(privileges)?;

        let id = state.next_id;
        state.next_id += 1;
        state.roles.push(AuthorizationRole {
            role_id: id,
            system: false,
            name: name.to_string(),
            info: None,
            privilege: privileges.to_vec(),
        });
        Ok(id)
    }

    async fn update_role(
        &self,
        role_id: i32,
        new_name: &str,
        privileges: &[String],
    ) -> Result<()> {
        self.pause().await;
        let mut state = self.available()?;
        if state
            .roles
            .iter()
            .any(|r| r.name == new_name && r.role_id != role_id)
        {
            return Err(fault(
                500,
                "AlreadyExists",
                format!("The specified key, name, or identifier '{new_name}' already exists."),
            ));
        }
        Self::check_privileges(privileges)?;

        let Some(role) = state.roles.iter_mut().find(|r| r.role_id == role_id) else {
            return Err(fault(
                500,
                "NotFound",
                format!("The object or item referred to could not be found: role {role_id}"),
            ));
        };
        if role.system {
            return Err(fault(
                500,
                "InvalidArgument",
                format!("A specified parameter was not correct: roleId ({role_id} is a system role)"),
            ));
        }
        role.name = new_name.to_string();
        role.privilege = privileges.to_vec();
        Ok(())
    }

    async fn remove_role(&self, role_id: i32, fail_if_used: bool) -> Result<()> {
        self.pause().await;
        let mut state = self.available()?;
        let Some(position) = state.roles.iter().position(|r| r.role_id == role_id) else {
            return Err(fault(
                500,
                "NotFound",
                format!("The object or item referred to could not be found: role {role_id}"),
            ));
        };
        if state.roles[position].system {
            return Err(fault(
                500,
                "InvalidArgument",
                format!("A specified parameter was not correct: roleId ({role_id} is a system role)"),
            ));
        }
        if fail_if_used && state.in_use.contains(&role_id) {
            return Err(fault(
                500,
                "RemoveFailed",
                format!("The role {role_id} is in use by one or more permissions"),
            ));
        }
        state.roles.remove(position);
        state.in_use.remove(&role_id);
        Ok(())
    }
}
