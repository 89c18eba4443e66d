use crate::constants::{CHANNEL_BUFFER_SIZE, SHOW_LIMIT_PER_MINUTE, VERSION};
use crate::state::CopilotCard;
use cosmic::{
    iced::{
        futures::{self, SinkExt},
        stream,
    },
    iced_futures::Subscription,
};
use cosmic_copilot_util::{CopilotCategory, CopilotMessage};
use futures::channel::mpsc;
use std::num::NonZeroU64;
use std::time::{Duration, Instant};
use tokio::{
    sync::mpsc::{Receiver, Sender, channel},
    task::JoinHandle,
};
use tracing::error;

use zbus::{
    Connection, connection::Builder as ConnectionBuilder, interface,
    object_server::SignalEmitter,
};

/// Well-known bus name of the co-pilot service
pub const BUS_NAME: &str = "dev.ailearn.CoPilot";
/// Object path the co-pilot interface is served at
pub const OBJECT_PATH: &str = "/dev/ailearn/CoPilot";

#[derive(Debug)]
pub struct Conns {
    copilot: Connection,
    pub tx: Sender<Input>,
    rx: Receiver<Input>,
}

impl Conns {
    pub async fn new() -> zbus::Result<Self> {
        let (tx, rx) = channel(CHANNEL_BUFFER_SIZE);

        for _ in 0..5 {
            if let Some(conn) = ConnectionBuilder::session()
                .ok()
                .and_then(|conn| conn.name(BUS_NAME).ok())
                .and_then(|conn| {
                    conn.serve_at(
                        OBJECT_PATH,
                        CoPilot(tx.clone(), NonZeroU64::new(1).unwrap(), ShowLimiter::new()),
                    )
                    .ok()
                })
                .map(ConnectionBuilder::build)
            {
                if let Ok(conn) = conn.await {
                    return Ok(Self {
                        tx,
                        copilot: conn,
                        rx,
                    });
                }
            } else {
                error!("Failed to create connection at {OBJECT_PATH}");
                tokio::time::sleep(Duration::from_millis(100)).await;
            }
        }

        Err(zbus::Error::Failure(
            "Failed to create the co-pilot bus server".to_string(),
        ))
    }
}

struct Start;
struct Waiting;

struct Machine<S> {
    conns: Option<Conns>,
    output: mpsc::Sender<Event>,
    marker: core::marker::PhantomData<S>,
}

impl<S> Machine<S> {
    pub fn new(conns: Option<Conns>, output: mpsc::Sender<Event>) -> Self {
        Self {
            conns,
            output,
            marker: core::marker::PhantomData,
        }
    }

    pub fn transition<Next>(self) -> Machine<Next> {
        Machine::<Next> {
            conns: self.conns,
            output: self.output,
            marker: core::marker::PhantomData,
        }
    }
}

impl Machine<Start> {
    pub async fn exec(mut self) -> Result<(Machine<Waiting>, Conns), ()> {
        let handle: JoinHandle<zbus::Result<_>> = tokio::spawn(async move {
            let conns = Conns::new().await?;
            Ok(conns)
        });

        match handle.await {
            Ok(Ok(conns)) => {
                _ = self.output.send(Event::Ready(conns.tx.clone())).await;
                Ok((self.transition::<Waiting>(), conns))
            }
            Ok(Err(err)) => {
                error!("Failed to create connection {}", err);
                Err(())
            }
            Err(err) => {
                error!("Failed to create connection {}", err);
                Err(())
            }
        }
    }
}

impl Machine<Waiting> {
    pub async fn exec(mut self, mut conns: Conns) {
        loop {
            if let Some(next) = conns.rx.recv().await {
                match next {
                    Input::Card(card) => {
                        _ = self.output.send(Event::Card(card)).await;
                    }
                    Input::Withdraw(id) => {
                        _ = self.output.send(Event::Withdraw(id)).await;
                    }
                    Input::Dismissed(id) => {
                        let object_server = conns.copilot.object_server();
                        let Ok(iface_ref) =
                            object_server.interface::<_, CoPilot>(OBJECT_PATH).await
                        else {
                            continue;
                        };
                        if let Err(err) =
                            CoPilot::card_dismissed(iface_ref.signal_emitter(), id).await
                        {
                            error!("Failed to signal dismissed card {}", err);
                        }
                    }
                    Input::ActionInvoked(id) => {
                        let object_server = conns.copilot.object_server();
                        let Ok(iface_ref) =
                            object_server.interface::<_, CoPilot>(OBJECT_PATH).await
                        else {
                            continue;
                        };
                        if let Err(err) =
                            CoPilot::action_invoked(iface_ref.signal_emitter(), id).await
                        {
                            error!("Failed to signal invoked action {}", err);
                        }
                    }
                }
            } else {
                // The channel was closed, so we are done
                return;
            }
        }
    }
}

#[derive(Debug)]
pub enum Input {
    /// A new card accepted from the bus
    Card(CopilotCard),
    /// The owner removed a card
    Withdraw(u32),
    /// The learner dismissed a card; emit the signal
    Dismissed(u32),
    /// The learner activated a card action; emit the signal
    ActionInvoked(u32),
}

#[derive(Debug, Clone)]
pub enum Event {
    Ready(Sender<Input>),
    Card(CopilotCard),
    Withdraw(u32),
}

pub fn copilot() -> Subscription<Event> {
    struct SomeWorker;

    Subscription::run_with_id(
        std::any::TypeId::of::<SomeWorker>(),
        stream::channel(CHANNEL_BUFFER_SIZE, |output| async move {
            let machine = Machine::<Start>::new(None, output);

            if let Ok((waiting, conns)) = machine.exec().await {
                waiting.exec(conns).await;
            };

            futures::pending!();
        }),
    )
}

/// Flood guard for the Show method
///
/// The interface serves a single host application, so one sliding window
/// is enough; a runaway coach engine gets throttled instead of filling the
/// screen.
struct ShowLimiter {
    window_start: Instant,
    count: u32,
}

impl ShowLimiter {
    fn new() -> Self {
        Self {
            window_start: Instant::now(),
            count: 0,
        }
    }

    /// Check whether another card should be accepted.
    /// Returns true if under the limit, false if throttled.
    fn check_and_update(&mut self) -> bool {
        const WINDOW: Duration = Duration::from_secs(60);

        let now = Instant::now();

        // Reset window if expired
        if now.duration_since(self.window_start) > WINDOW {
            self.window_start = now;
            self.count = 1;
            return true;
        }

        if self.count >= SHOW_LIMIT_PER_MINUTE {
            tracing::warn!(
                "Throttling co-pilot cards - exceeded {} per minute",
                SHOW_LIMIT_PER_MINUTE
            );
            return false;
        }

        self.count += 1;
        true
    }
}

pub struct CoPilot(Sender<Input>, NonZeroU64, ShowLimiter);

#[interface(name = "dev.ailearn.CoPilot1")]
impl CoPilot {
    /// category    STRING  One of "suggestion", "warning", "encouragement".
    ///                     Any other value is a caller bug and is rejected
    ///                     with InvalidArgs rather than coerced to a default.
    ///
    /// text        STRING  The message body. Rendered in full.
    ///
    /// action_label STRING Label for the optional secondary action. An empty
    ///                     string means the card has no action; the dismiss
    ///                     control is always present regardless.
    ///
    /// Returns the id assigned to the card.
    async fn show(
        &mut self,
        category: &str,
        text: &str,
        action_label: &str,
    ) -> zbus::fdo::Result<u32> {
        let category: CopilotCategory = category
            .parse()
            .map_err(|err: cosmic_copilot_util::UnrecognizedCategory| {
                zbus::fdo::Error::InvalidArgs(err.to_string())
            })?;

        if !self.2.check_and_update() {
            return Err(zbus::fdo::Error::LimitsExceeded(
                "co-pilot card rate limit exceeded".to_string(),
            ));
        }

        let id = {
            let id = self.1;
            self.1 = match self.1.checked_add(1) {
                Some(id) => id,
                None => {
                    tracing::warn!("Card ID overflowed");
                    NonZeroU64::new(1).unwrap()
                }
            };
            // Truncate u64 to u32 for D-Bus compatibility; card lifetimes
            // are short, so collisions would need 4.2B live cards.
            id.get() as u32
        };

        let mut message = CopilotMessage::new(category, text);
        if !action_label.is_empty() {
            message = message.with_action(action_label);
        }

        if let Err(err) = self.0.send(Input::Card(CopilotCard::new(id, message))).await {
            tracing::error!("Failed to send co-pilot card: {}", err);
        }

        Ok(id)
    }

    /// Remove a card the owner no longer wants shown.
    ///
    /// This is not a dismissal; no CardDismissed signal follows.
    async fn withdraw(&self, id: u32) {
        if let Err(err) = self.0.send(Input::Withdraw(id)).await {
            tracing::error!("Failed to send withdraw: {}", err);
        }
    }

    #[zbus(out_args("name", "vendor", "version"))]
    async fn server_information(&self) -> (&'static str, &'static str, &'static str) {
        ("cosmic-copilot", "AI Learn OS", VERSION)
    }

    /// id  UINT32  The card the learner dismissed. Emitted exactly once per
    ///             card, at the moment it leaves the screen.
    #[zbus(signal)]
    async fn card_dismissed(signal_ctxt: &SignalEmitter<'_>, id: u32) -> zbus::Result<()>;

    /// id  UINT32  The card whose action the learner activated. May be
    ///             emitted repeatedly while the card stays visible.
    #[zbus(signal)]
    async fn action_invoked(signal_ctxt: &SignalEmitter<'_>, id: u32) -> zbus::Result<()>;
}
