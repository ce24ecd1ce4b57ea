//! Studio snapshot loading.
//!
//! The external store exports one JSON document holding every collection
//! this layer consumes. Loading is the data-access boundary: loosely-typed
//! store representations are normalized here, so downstream components never
//! branch on wire shape. Reads take a shared lock so a concurrent exporter
//! cannot tear the document mid-read.

use crate::types::*;
use crate::{Error, Result};
use chrono::{DateTime, Utc};
use fs2::FileExt;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Snapshot file name inside the data directory
const SNAPSHOT_FILE: &str = "studio.json";

/// Default snapshot location for a data directory
pub fn default_snapshot_path(data_dir: &Path) -> PathBuf {
    data_dir.join(SNAPSHOT_FILE)
}

/// One studio's entity collections, fully normalized
#[derive(Clone, Debug, Default)]
pub struct StudioSnapshot {
    pub clients: Vec<Client>,
    pub packages: Vec<Package>,
    pub diet_plans: Vec<DietPlan>,
    pub sessions: Vec<LiveSession>,
    pub videos: Vec<Video>,
    pub notifications: Vec<Notification>,
    /// Per-client progress sections, keyed by client id
    pub progress: HashMap<String, ClientProgress>,
}

impl StudioSnapshot {
    /// Progress section for one client, if the store exported one
    pub fn progress_for(&self, client_id: &str) -> Option<&ClientProgress> {
        self.progress.get(client_id)
    }
}

/// The store serializes a client's `packageId` either as the raw id or as
/// the expanded package document, depending on which endpoint produced it
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PackageRef {
    Id(String),
    Expanded(ExpandedPackageRef),
}

#[derive(Debug, Deserialize)]
struct ExpandedPackageRef {
    #[serde(alias = "_id")]
    id: String,
}

impl PackageRef {
    fn into_id(self) -> String {
        match self {
            PackageRef::Id(id) => id,
            PackageRef::Expanded(expanded) => expanded.id,
        }
    }
}

/// Client record as stored, before package-reference normalization
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawClient {
    #[serde(alias = "_id")]
    id: String,
    name: String,
    #[serde(default)]
    phone: String,
    #[serde(default, rename = "packageId")]
    package: Option<PackageRef>,
    created_at: DateTime<Utc>,
}

impl From<RawClient> for Client {
    fn from(raw: RawClient) -> Self {
        Client {
            id: raw.id,
            name: raw.name,
            phone: raw.phone,
            package_id: raw.package.map(PackageRef::into_id),
            created_at: raw.created_at,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct RawSnapshot {
    #[serde(default)]
    clients: Vec<serde_json::Value>,
    #[serde(default)]
    packages: Vec<Package>,
    #[serde(default)]
    diet_plans: Vec<DietPlan>,
    #[serde(default)]
    sessions: Vec<LiveSession>,
    #[serde(default)]
    videos: Vec<Video>,
    #[serde(default)]
    notifications: Vec<Notification>,
    #[serde(default)]
    progress: HashMap<String, ClientProgress>,
}

/// Load and normalize a studio snapshot from a JSON file.
///
/// A missing file is an error (there is nothing to compute over). Malformed
/// client records are logged and skipped rather than failing the whole load,
/// matching how partial store exports behave in practice.
pub fn load_snapshot(path: &Path) -> Result<StudioSnapshot> {
    if !path.exists() {
        return Err(Error::Snapshot(format!(
            "snapshot not found at {}",
            path.display()
        )));
    }

    let file = File::open(path)?;
    // Shared lock: exporters take the exclusive side
    file.lock_shared()?;

    let mut contents = String::new();
    let mut reader = std::io::BufReader::new(&file);
    let read_result = reader.read_to_string(&mut contents);
    file.unlock()?;
    read_result?;

    let raw: RawSnapshot = serde_json::from_str(&contents)?;

    let clients: Vec<Client> = raw
        .clients
        .into_iter()
        .enumerate()
        .filter_map(|(i, value)| match serde_json::from_value::<RawClient>(value) {
            Ok(client) => Some(Client::from(client)),
            Err(e) => {
                tracing::warn!("Skipping malformed client record {}: {}", i, e);
                None
            }
        })
        .collect();

    let snapshot = StudioSnapshot {
        clients,
        packages: raw.packages,
        diet_plans: raw.diet_plans,
        sessions: raw.sessions,
        videos: raw.videos,
        notifications: raw.notifications,
        progress: raw.progress,
    };

    tracing::info!(
        "Loaded snapshot from {}: {} clients, {} packages, {} sessions",
        path.display(),
        snapshot.clients.len(),
        snapshot.packages.len(),
        snapshot.sessions.len()
    );

    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_snapshot(json: &str) -> (tempfile::TempDir, PathBuf) {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("studio.json");
        std::fs::write(&path, json).unwrap();
        (temp_dir, path)
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let result = load_snapshot(&temp_dir.path().join("nope.json"));
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_document_loads_empty_collections() {
        let (_dir, path) = write_snapshot("{}");
        let snapshot = load_snapshot(&path).unwrap();

        assert!(snapshot.clients.is_empty());
        assert!(snapshot.packages.is_empty());
        assert!(snapshot.progress.is_empty());
    }

    #[test]
    fn test_package_id_accepts_both_representations() {
        let json = r#"{
            "clients": [
                {
                    "_id": "c1",
                    "name": "Alice",
                    "phone": "555-0101",
                    "packageId": "p1",
                    "createdAt": "2025-10-01T09:00:00Z"
                },
                {
                    "_id": "c2",
                    "name": "Bob",
                    "phone": "555-0102",
                    "packageId": { "_id": "p1", "name": "Premium", "price": 59.99 },
                    "createdAt": "2025-10-02T09:00:00Z"
                },
                {
                    "_id": "c3",
                    "name": "Cara",
                    "phone": "555-0103",
                    "createdAt": "2025-10-03T09:00:00Z"
                }
            ]
        }"#;

        let (_dir, path) = write_snapshot(json);
        let snapshot = load_snapshot(&path).unwrap();

        assert_eq!(snapshot.clients.len(), 3);
        // Raw id and expanded object normalize to the same reference
        assert_eq!(snapshot.clients[0].package_id.as_deref(), Some("p1"));
        assert_eq!(snapshot.clients[1].package_id.as_deref(), Some("p1"));
        assert_eq!(snapshot.clients[2].package_id, None);
    }

    #[test]
    fn test_malformed_client_is_skipped() {
        let json = r#"{
            "clients": [
                { "_id": "c1", "name": "Alice", "createdAt": "2025-10-01T09:00:00Z" },
                { "_id": "c2" },
                { "_id": "c3", "name": "Cara", "createdAt": "2025-10-03T09:00:00Z" }
            ]
        }"#;

        let (_dir, path) = write_snapshot(json);
        let snapshot = load_snapshot(&path).unwrap();

        let ids: Vec<&str> = snapshot.clients.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["c1", "c3"]);
    }

    #[test]
    fn test_full_document_round_trip() {
        let json = r#"{
            "clients": [
                {
                    "_id": "c1",
                    "name": "Alice",
                    "phone": "555-0101",
                    "packageId": "p2",
                    "createdAt": "2025-10-01T09:00:00Z"
                }
            ],
            "packages": [
                {
                    "_id": "p2",
                    "name": "Premium",
                    "description": "Most popular choice",
                    "price": 59.99,
                    "features": ["Diet plans", "2 live sessions/month"],
                    "videoAccess": true,
                    "liveSessionsPerMonth": 2,
                    "dietPlanAccess": true,
                    "workoutPlanAccess": true
                }
            ],
            "sessions": [
                {
                    "_id": "s1",
                    "title": "Power Yoga Session",
                    "trainer": "Sarah Johnson",
                    "scheduledAt": "2025-11-12T18:00:00Z",
                    "durationMinutes": 60,
                    "participants": 8,
                    "maxParticipants": 15,
                    "status": "upcoming",
                    "meetingLink": null
                }
            ],
            "videos": [
                {
                    "_id": "v1",
                    "title": "Morning Yoga Flow",
                    "category": "Yoga",
                    "durationMinutes": 30
                }
            ],
            "notifications": [
                {
                    "_id": "n1",
                    "title": "Session booked",
                    "message": "You are in for Power Yoga",
                    "type": "session",
                    "isRead": false,
                    "link": "/sessions",
                    "createdAt": "2025-11-10T08:00:00Z"
                }
            ],
            "progress": {
                "c1": {
                    "startWeight": 92.0,
                    "goalWeight": 85.0,
                    "weightHistory": [
                        { "date": "2025-10-01T07:00:00Z", "weight": 92.0 },
                        { "date": "2025-10-15T07:00:00Z", "weight": 89.5 }
                    ],
                    "measurements": [
                        { "date": "2025-10-01T07:00:00Z", "chest": 104.0, "waist": 96.0, "hips": null }
                    ],
                    "stats": { "totalWorkouts": 12, "currentStreak": 4, "goalReached": false }
                }
            }
        }"#;

        let (_dir, path) = write_snapshot(json);
        let snapshot = load_snapshot(&path).unwrap();

        assert_eq!(snapshot.packages[0].name, "Premium");
        assert!(snapshot.packages[0].diet_plan_access);
        assert_eq!(snapshot.sessions[0].status, SessionStatus::Upcoming);
        assert_eq!(snapshot.videos[0].category, "Yoga");
        assert_eq!(snapshot.notifications[0].kind, NotificationKind::Session);

        let progress = snapshot.progress_for("c1").unwrap();
        assert_eq!(progress.weight_history.len(), 2);
        assert_eq!(progress.stats.total_workouts, 12);
        assert_eq!(progress.measurements[0].hips, None);
    }

    #[test]
    fn test_unknown_notification_kind_tags_as_other() {
        let json = r#"{
            "notifications": [
                {
                    "_id": "n1",
                    "title": "Promo",
                    "message": "Spring discount",
                    "type": "marketing",
                    "isRead": true,
                    "link": null,
                    "createdAt": "2025-11-10T08:00:00Z"
                }
            ]
        }"#;

        let (_dir, path) = write_snapshot(json);
        let snapshot = load_snapshot(&path).unwrap();
        assert_eq!(snapshot.notifications[0].kind, NotificationKind::Other);
    }
}
