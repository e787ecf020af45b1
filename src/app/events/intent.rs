/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Primäre Maustaste auf der Canvas gedrückt (Canvas-Koordinaten)
    PointerPressed { pos: glam::Vec2 },
    /// Mauszeiger bewegt (Canvas-Koordinaten)
    PointerMoved { pos: glam::Vec2 },
    /// Primäre Maustaste losgelassen
    PointerReleased,
    /// Canvas aus den konfigurierten Start-Blöcken neu aufbauen
    ResetScratchpadRequested,
    /// Snap-Regionen-Overlay ein-/ausblenden
    ToggleSnapRegionsRequested,
    /// Linienstärke aller Blöcke ändern
    StrokeSizeChanged { size: f32 },
    /// Aktuelle Optionen in die Konfigurationsdatei schreiben
    SaveOptionsRequested,
    /// Anwendung beenden
    ExitRequested,
}
