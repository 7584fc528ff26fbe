//! Señal de disponibilidad de la librería de mapas
//!
//! Notificación de un solo disparo: `ReadyNotifier::notify` consume el
//! emisor, así que no puede dispararse dos veces. Si el emisor se
//! descarta sin notificar (desmontaje o fallo de carga) la espera
//! termina con `false`.

use futures::channel::oneshot;

pub struct ReadyNotifier(oneshot::Sender<()>);

pub struct ReadySignal(oneshot::Receiver<()>);

/// Crear el par emisor/receptor
pub fn readiness() -> (ReadyNotifier, ReadySignal) {
    let (tx, rx) = oneshot::channel();
    (ReadyNotifier(tx), ReadySignal(rx))
}

impl ReadyNotifier {
    /// Marcar la librería como lista. Devuelve `false` si ya nadie espera.
    pub fn notify(self) -> bool {
        self.0.send(()).is_ok()
    }
}

impl ReadySignal {
    /// Esperar la notificación; `false` si se canceló
    pub async fn wait(self) -> bool {
        self.0.await.is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn test_notify_resolves_signal() {
        let (notifier, signal) = readiness();
        assert!(notifier.notify());
        assert!(block_on(signal.wait()));
    }

    #[test]
    fn test_dropped_notifier_cancels() {
        let (notifier, signal) = readiness();
        drop(notifier);
        assert!(!block_on(signal.wait()));
    }

    #[test]
    fn test_notify_after_signal_dropped() {
        let (notifier, signal) = readiness();
        drop(signal);
        assert!(!notifier.notify());
    }
}
