//! Physics tuning loader.
//!
//! Reads `physics.toml` from the executable's directory (or CWD).
//! Falls back to the legacy tuning values if the file is missing or incomplete.
//!
//! All distances are simulation units (pixels, Y grows downward), all times
//! are seconds.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

pub const CONFIG_FILE_NAME: &str = "physics.toml";

// ── Public Config Struct ──

#[derive(Clone, Debug, PartialEq)]
pub struct PhysicsConfig {
    pub movement: MovementConfig,
    pub collision: CollisionConfig,
    pub timing: TimingConfig,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MovementConfig {
    pub walk_speed: f32,      // px/s at 100% speed stat
    pub jump_impulse: f32,    // px/s upward at 100% jump stat
    pub gravity: f32,         // px/s²
    pub max_fall_speed: f32,  // terminal velocity, px/s
    pub climb_speed: f32,     // px/s on ladders
}

#[derive(Clone, Debug, PartialEq)]
pub struct CollisionConfig {
    /// Ground at most this far above the query point still counts as "below".
    pub ground_epsilon: f32,
    /// Largest vertical step accepted when a grounded entity crosses onto
    /// an unlinked foothold. Anything further away is a ledge.
    pub ground_snap: f32,
    /// Horizontal half-width of a ladder's grab rectangle.
    pub ladder_grab_tolerance: f32,
    /// Spawn points are lifted this far above the ground they snap to.
    pub spawn_height_offset: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TimingConfig {
    pub fixed_timestep: f32,
    pub max_frame_time: f32,     // longer frames are clamped (spiral-of-death guard)
    pub max_steps_per_frame: u32,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("physics.toml parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid value for `{key}`: {value}")]
    Invalid { key: &'static str, value: f32 },
}

// ── TOML Schema (with serde defaults) ──

#[derive(Deserialize, Debug, Default)]
struct TomlConfig {
    #[serde(default)]
    movement: TomlMovement,
    #[serde(default)]
    collision: TomlCollision,
    #[serde(default)]
    timing: TomlTiming,
}

#[derive(Deserialize, Debug)]
struct TomlMovement {
    #[serde(default = "default_walk_speed")]
    walk_speed: f32,
    #[serde(default = "default_jump_impulse")]
    jump_impulse: f32,
    #[serde(default = "default_gravity")]
    gravity: f32,
    #[serde(default = "default_max_fall_speed")]
    max_fall_speed: f32,
    #[serde(default = "default_climb_speed")]
    climb_speed: f32,
}

#[derive(Deserialize, Debug)]
struct TomlCollision {
    #[serde(default = "default_ground_epsilon")]
    ground_epsilon: f32,
    #[serde(default = "default_ground_snap")]
    ground_snap: f32,
    #[serde(default = "default_ladder_grab")]
    ladder_grab_tolerance: f32,
    #[serde(default = "default_spawn_offset")]
    spawn_height_offset: f32,
}

#[derive(Deserialize, Debug)]
struct TomlTiming {
    #[serde(default = "default_fixed_timestep")]
    fixed_timestep: f32,
    #[serde(default = "default_max_frame_time")]
    max_frame_time: f32,
    #[serde(default = "default_max_steps")]
    max_steps_per_frame: u32,
}

// ── Defaults ──

fn default_walk_speed() -> f32 { 125.0 }
fn default_jump_impulse() -> f32 { 555.0 }
fn default_gravity() -> f32 { 2000.0 }
fn default_max_fall_speed() -> f32 { 670.0 }
fn default_climb_speed() -> f32 { 120.0 }
fn default_ground_epsilon() -> f32 { 1.0 }
fn default_ground_snap() -> f32 { 5.0 }
fn default_ladder_grab() -> f32 { 10.0 }
fn default_spawn_offset() -> f32 { 10.0 }
fn default_fixed_timestep() -> f32 { 1.0 / 60.0 }
fn default_max_frame_time() -> f32 { 0.25 }
fn default_max_steps() -> u32 { 4 }

impl Default for TomlMovement {
    fn default() -> Self {
        TomlMovement {
            walk_speed: default_walk_speed(),
            jump_impulse: default_jump_impulse(),
            gravity: default_gravity(),
            max_fall_speed: default_max_fall_speed(),
            climb_speed: default_climb_speed(),
        }
    }
}

impl Default for TomlCollision {
    fn default() -> Self {
        TomlCollision {
            ground_epsilon: default_ground_epsilon(),
            ground_snap: default_ground_snap(),
            ladder_grab_tolerance: default_ladder_grab(),
            spawn_height_offset: default_spawn_offset(),
        }
    }
}

impl Default for TomlTiming {
    fn default() -> Self {
        TomlTiming {
            fixed_timestep: default_fixed_timestep(),
            max_frame_time: default_max_frame_time(),
            max_steps_per_frame: default_max_steps(),
        }
    }
}

impl From<TomlConfig> for PhysicsConfig {
    fn from(cfg: TomlConfig) -> Self {
        PhysicsConfig {
            movement: MovementConfig {
                walk_speed: cfg.movement.walk_speed,
                jump_impulse: cfg.movement.jump_impulse,
                gravity: cfg.movement.gravity,
                max_fall_speed: cfg.movement.max_fall_speed,
                climb_speed: cfg.movement.climb_speed,
            },
            collision: CollisionConfig {
                ground_epsilon: cfg.collision.ground_epsilon,
                ground_snap: cfg.collision.ground_snap,
                ladder_grab_tolerance: cfg.collision.ladder_grab_tolerance,
                spawn_height_offset: cfg.collision.spawn_height_offset,
            },
            timing: TimingConfig {
                fixed_timestep: cfg.timing.fixed_timestep,
                max_frame_time: cfg.timing.max_frame_time,
                max_steps_per_frame: cfg.timing.max_steps_per_frame,
            },
        }
    }
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        TomlConfig::default().into()
    }
}

// ── Loading ──

impl PhysicsConfig {
    /// Load tuning from `physics.toml`.
    /// Search order: (1) exe directory, (2) current working directory.
    /// A missing file, a broken file or missing keys fall back to defaults.
    pub fn load() -> Self {
        for dir in candidate_dirs() {
            let path = dir.join(CONFIG_FILE_NAME);
            if !path.exists() { continue; }
            match Self::load_from(&path) {
                Ok(cfg) => return cfg,
                Err(e) => {
                    warn!("{e}");
                    warn!("using default physics tuning");
                    return Self::default();
                }
            }
        }
        Self::default()
    }

    /// Load tuning from an explicit file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Parse tuning from TOML text. Keys that are absent keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let cfg: PhysicsConfig = toml::from_str::<TomlConfig>(text)?.into();
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let t = &self.timing;
        if !(t.fixed_timestep.is_finite() && t.fixed_timestep > 0.0) {
            return Err(ConfigError::Invalid { key: "timing.fixed_timestep", value: t.fixed_timestep });
        }
        if t.max_steps_per_frame == 0 {
            return Err(ConfigError::Invalid { key: "timing.max_steps_per_frame", value: 0.0 });
        }
        let m = &self.movement;
        let non_negative = [
            ("movement.walk_speed", m.walk_speed),
            ("movement.jump_impulse", m.jump_impulse),
            ("movement.gravity", m.gravity),
            ("movement.max_fall_speed", m.max_fall_speed),
            ("movement.climb_speed", m.climb_speed),
            ("collision.ground_epsilon", self.collision.ground_epsilon),
            ("collision.ground_snap", self.collision.ground_snap),
            ("collision.ladder_grab_tolerance", self.collision.ladder_grab_tolerance),
            ("timing.max_frame_time", t.max_frame_time),
        ];
        for (key, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::Invalid { key, value });
            }
        }
        // may be negative (spawn below the given point)
        let offset = self.collision.spawn_height_offset;
        if !offset.is_finite() {
            return Err(ConfigError::Invalid { key: "collision.spawn_height_offset", value: offset });
        }
        Ok(())
    }
}

/// Candidate directories to search: exe dir + CWD (deduplicated).
fn candidate_dirs() -> Vec<PathBuf> {
    let mut dirs = vec![];

    if let Ok(exe) = std::env::current_exe() {
        // Resolve symlinks so a linked binary still finds its own tuning file.
        let resolved = exe.canonicalize().unwrap_or(exe);
        if let Some(parent) = resolved.parent() {
            dirs.push(parent.to_path_buf());
        }
    }

    if let Ok(cwd) = std::env::current_dir() {
        if !dirs.iter().any(|d| d == &cwd) {
            dirs.push(cwd);
        }
    }

    if dirs.is_empty() {
        dirs.push(PathBuf::from("."));
    }

    dirs
}
