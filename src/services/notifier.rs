// ============================================================================
// NOTIFIER - Avisos bloqueantes al usuario
// ============================================================================

use crate::models::Notice;

/// Canal de avisos al usuario
pub trait Notifier {
    fn notify(&self, notice: &Notice);
}

/// window.alert() - bloquea hasta que el usuario acepta
#[derive(Clone, Copy, Debug, Default)]
pub struct AlertNotifier;

impl Notifier for AlertNotifier {
    fn notify(&self, notice: &Notice) {
        let message = notice.message();
        match web_sys::window() {
            Some(window) => {
                if let Err(e) = window.alert_with_message(&message) {
                    log::error!("❌ [NOTICE] alert() falló: {:?}", e);
                }
            }
            None => log::warn!("⚠️ [NOTICE] Sin window, aviso perdido: {}", message),
        }
    }
}
