use crate::constants::*;
use crate::handlers::Message;
use crate::rendering::view_cards;
use crate::state::{CardStack, CopilotCard};
use crate::subscriptions::copilot;
use cosmic::app::{Core, Settings, Task};
use cosmic::cosmic_config::{Config, CosmicConfigEntry};
use cosmic::iced::platform_specific::runtime::wayland::layer_surface::{
    IcedMargin, IcedOutput, SctkLayerSurfaceSettings,
};
use cosmic::iced::platform_specific::shell::wayland::commands::layer_surface::{
    Anchor, KeyboardInteractivity, destroy_layer_surface, get_layer_surface,
};
use cosmic::iced::{self, Length, Limits, Subscription};
use cosmic::iced_runtime::core::window::Id as SurfaceId;
use cosmic::iced_widget::vertical_space;
use cosmic::widget::{autosize, container};
use cosmic::{Application, Element};
use cosmic_copilot_config::CopilotConfig;
use cosmic_time::{Timeline, anim, id};
use tokio::sync::mpsc;

pub fn run() -> cosmic::iced::Result {
    cosmic::app::run::<CosmicCoPilot>(
        Settings::default()
            .antialiasing(true)
            .client_decorations(true)
            .debug(false)
            .default_text_size(16.0)
            .scale_factor(1.0)
            .no_main_window(true)
            .exit_on_close(false),
        (),
    )?;
    Ok(())
}

struct CosmicCoPilot {
    core: Core,
    active_surface: bool,
    autosize_id: iced::id::Id,
    window_id: SurfaceId,
    stack: CardStack,
    cards_id: id::Cards,
    copilot_tx: Option<mpsc::Sender<copilot::Input>>,
    config: CopilotConfig,
    timeline: Timeline,
}

impl CosmicCoPilot {
    fn layer_anchor(&self) -> Anchor {
        use cosmic_copilot_config::Anchor as ConfigAnchor;

        match self.config.anchor {
            ConfigAnchor::Top => Anchor::TOP,
            ConfigAnchor::Bottom => Anchor::BOTTOM,
            ConfigAnchor::Left => Anchor::LEFT,
            ConfigAnchor::Right => Anchor::RIGHT,
            ConfigAnchor::TopLeft => Anchor::TOP.union(Anchor::LEFT),
            ConfigAnchor::TopRight => Anchor::TOP.union(Anchor::RIGHT),
            ConfigAnchor::BottomLeft => Anchor::BOTTOM.union(Anchor::LEFT),
            ConfigAnchor::BottomRight => Anchor::BOTTOM.union(Anchor::RIGHT),
        }
    }

    fn push_card(&mut self, card: CopilotCard) -> Task<Message> {
        let surface_task = if self.stack.is_empty() && !self.config.do_not_disturb {
            self.active_surface = true;
            get_layer_surface(SctkLayerSurfaceSettings {
                id: self.window_id,
                anchor: self.layer_anchor(),
                exclusive_zone: 0,
                keyboard_interactivity: KeyboardInteractivity::None,
                namespace: "copilot".to_string(),
                margin: IcedMargin {
                    top: SURFACE_MARGIN,
                    right: SURFACE_MARGIN,
                    bottom: SURFACE_MARGIN,
                    left: SURFACE_MARGIN,
                },
                size: Some((Some(CARD_WIDTH as u32), Some(1))),
                output: IcedOutput::Active,
                size_limits: Limits::NONE
                    .min_width(CARD_MIN_WIDTH)
                    .min_height(1.0)
                    .max_height(CARD_MAX_HEIGHT)
                    .max_width(CARD_WIDTH),
                ..Default::default()
            })
        } else {
            Task::none()
        };

        self.stack.push(card);
        surface_task
    }

    /// Learner dismissed a card.
    ///
    /// The visibility transition is unconditional; the CardDismissed
    /// signal depends on the feed sender being connected, and the stack's
    /// return value keeps it to exactly once per card.
    fn dismiss(&mut self, id: u32) -> Task<Message> {
        if self.stack.dismiss(id) {
            if let Some(tx) = &self.copilot_tx {
                let tx = tx.clone();
                tokio::spawn(async move {
                    _ = tx.send(copilot::Input::Dismissed(id)).await;
                });
            }
        } else {
            tracing::warn!("dismiss for unknown or hidden card {id}");
        }

        self.teardown_if_empty()
    }

    /// Owner withdrew a card; no dismissal signal follows.
    fn withdraw(&mut self, id: u32) -> Task<Message> {
        if self.stack.withdraw(id).is_none() {
            tracing::warn!("withdraw for unknown card {id}");
        }

        self.teardown_if_empty()
    }

    /// Learner activated a card action. Visibility never changes here;
    /// each activation forwards one ActionInvoked signal.
    fn invoke_action(&mut self, id: u32) {
        let Some(card) = self.stack.action_target(id) else {
            tracing::warn!("action for unknown or hidden card {id}");
            return;
        };

        if card.message.action_label.is_none() {
            tracing::warn!("action for card {id} that carries no action");
            return;
        }

        if let Some(tx) = &self.copilot_tx {
            let tx = tx.clone();
            tokio::spawn(async move {
                _ = tx.send(copilot::Input::ActionInvoked(id)).await;
            });
        }
    }

    fn teardown_if_empty(&mut self) -> Task<Message> {
        if self.stack.is_empty() && self.active_surface {
            self.active_surface = false;
            self.stack.shrink_visible();
            destroy_layer_surface(self.window_id)
        } else {
            Task::none()
        }
    }
}

impl cosmic::Application for CosmicCoPilot {
    type Message = Message;
    type Executor = cosmic::executor::single::Executor;
    type Flags = ();
    const APP_ID: &'static str = "dev.ailearn.CosmicCoPilot";

    fn init(core: Core, _flags: ()) -> (Self, Task<Message>) {
        let helper = Config::new(cosmic_copilot_config::ID, CopilotConfig::VERSION).ok();

        let config: CopilotConfig = helper
            .as_ref()
            .map(|helper| {
                CopilotConfig::get_entry(helper).unwrap_or_else(|(errors, config)| {
                    for err in errors {
                        if err.is_err() {
                            tracing::error!("{:?}", err);
                        }
                    }
                    config
                })
            })
            .unwrap_or_default();

        (
            CosmicCoPilot {
                core,
                active_surface: false,
                autosize_id: iced::id::Id::new("autosize"),
                window_id: SurfaceId::unique(),
                stack: CardStack::new(),
                cards_id: id::Cards::new("Copilot"),
                copilot_tx: None,
                config,
                timeline: Timeline::new(),
            },
            Task::none(),
        )
    }

    fn core(&self) -> &Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut Core {
        &mut self.core
    }

    fn view(&self) -> Element<Self::Message> {
        unimplemented!();
    }

    fn update(&mut self, message: Message) -> Task<Self::Message> {
        match message {
            Message::Copilot(event) => match event {
                copilot::Event::Ready(tx) => {
                    self.copilot_tx = Some(tx);
                }
                copilot::Event::Card(card) => {
                    return self.push_card(card);
                }
                copilot::Event::Withdraw(id) => {
                    return self.withdraw(id);
                }
            },
            Message::Dismissed(id) => {
                return self.dismiss(id);
            }
            Message::ActionClicked(id) => {
                self.invoke_action(id);
            }
            Message::Config(config) => {
                self.config = config;
            }
            Message::Frame(now) => {
                self.timeline.now(now);
            }
            Message::Ignore => {}
            Message::Surface(a) => {
                return cosmic::task::message(cosmic::Action::Cosmic(
                    cosmic::app::Action::Surface(a),
                ));
            }
        }
        Task::none()
    }

    fn view_window(&self, _: SurfaceId) -> Element<Message> {
        if self.stack.is_empty() {
            return container(vertical_space().height(Length::Fixed(1.0)))
                .center_x(Length::Fixed(1.0))
                .center_y(Length::Fixed(1.0))
                .into();
        }

        let card_elems = view_cards(&self.stack, &self.config);

        let card_list: Element<Message> = if self.config.enable_animations {
            // The anim! macro handles card entry/exit animations, adapting
            // to card height. Card body clicks are not a control surface, so
            // no press handler is attached.
            anim!(
                self.cards_id.clone(),
                &self.timeline,
                card_elems,
                Message::Ignore,
                None::<fn(cosmic_time::chain::Cards, bool) -> Message>,
                None::<fn(usize) -> Message>,
                "",
                "",
                "",
                None,
                true,
            )
            .width(Length::Fixed(CARD_WIDTH))
            .into()
        } else {
            cosmic::iced_widget::column(card_elems)
                .spacing(8)
                .width(Length::Fixed(CARD_WIDTH))
                .into()
        };

        autosize::autosize(card_list, self.autosize_id.clone())
            .min_width(AUTOSIZE_MIN_WIDTH)
            .min_height(AUTOSIZE_MIN_HEIGHT)
            .max_width(CARD_WIDTH)
            .max_height(CARD_MAX_HEIGHT)
            .into()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch(vec![
            self.core.watch_config(cosmic_copilot_config::ID).map(|u| {
                for why in u
                    .errors
                    .into_iter()
                    .filter(cosmic::cosmic_config::Error::is_err)
                {
                    tracing::error!(?why, "config load error");
                }
                Message::Config(u.config)
            }),
            self.timeline
                .as_subscription()
                .map(|(_, now)| Message::Frame(now)),
            copilot::copilot().map(Message::Copilot),
        ])
    }
}
