//! Zentrale Konfiguration für das Block-Scratchpad.
//!
//! `ScratchpadOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::{BlockConfig, LayoutMetrics};
use anyhow::Context;
use serde::{Deserialize, Serialize};

// ── Snapping ────────────────────────────────────────────────────────

/// Horizontale Snap-Toleranz: wird vor der Regions-Prüfung auf X addiert.
pub const SNAP_TOLERANCE_X: f32 = 10.0;
/// Vertikale Snap-Toleranz: wird vor der Regions-Prüfung auf Y addiert.
pub const SNAP_TOLERANCE_Y: f32 = 15.0;

// ── Canvas ──────────────────────────────────────────────────────────

/// Hintergrundfarbe der Canvas (RGBA: Weiß).
pub const CANVAS_BACKGROUND: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
/// Farbe der Debug-Overlays für Snap-Regionen (RGBA: halbtransparentes Rot).
pub const REGION_OVERLAY_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 0.25];

/// Start-Blöcke der Demo-Canvas.
pub fn default_blocks() -> Vec<BlockConfig> {
    vec![
        BlockConfig::new(
            "When !c2f is typed...",
            [1.0, 1.0, 0.0, 1.0],
            20.0,
            20.0,
            true,
            false,
        ),
        BlockConfig::new(
            "/me {param} C is {result} F.",
            [0.8, 0.8, 0.0, 1.0],
            200.0,
            200.0,
            true,
            true,
        ),
        BlockConfig::new(
            "/me {param} C is {result} F.",
            [0.0, 1.0, 1.0, 1.0],
            100.0,
            100.0,
            false,
            true,
        ),
    ]
}

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Scratchpad-Optionen.
/// Wird als `block_scratchpad.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScratchpadOptions {
    // ── Snapping ────────────────────────────────────────────────
    /// Toleranz [x, y], die vor der Regions-Prüfung auf die Block-Ecke addiert wird
    pub snap_tolerance: [f32; 2],

    // ── Darstellung ─────────────────────────────────────────────
    /// Hintergrundfarbe der Canvas
    pub canvas_background: [f32; 4],
    /// Snap-Regionen als Overlay einzeichnen
    pub show_snap_regions: bool,
    /// Farbe des Snap-Regionen-Overlays
    pub region_overlay_color: [f32; 4],

    // ── Layout ──────────────────────────────────────────────────
    /// Maße für Banner, Slots und Snap-Regionen
    pub layout: LayoutMetrics,

    // ── Inhalt ──────────────────────────────────────────────────
    /// Blöcke, mit denen die Canvas startet (und nach einem Reset neu aufgebaut wird)
    pub blocks: Vec<BlockConfig>,
}

impl Default for ScratchpadOptions {
    fn default() -> Self {
        Self {
            snap_tolerance: [SNAP_TOLERANCE_X, SNAP_TOLERANCE_Y],
            canvas_background: CANVAS_BACKGROUND,
            show_snap_regions: false,
            region_overlay_color: REGION_OVERLAY_COLOR,
            layout: LayoutMetrics::default(),
            blocks: default_blocks(),
        }
    }
}

impl ScratchpadOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Optionen nach {} schreiben", path.display()))?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("block_scratchpad"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("block_scratchpad.toml")
    }

    /// Snap-Toleranz als Vektor.
    pub fn snap_tolerance_vec(&self) -> glam::Vec2 {
        glam::Vec2::from(self.snap_tolerance)
    }
}
