//! Studio application: `cosmic::Application` implementation.

use std::collections::HashMap;
use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use cosmic::app::{Core, Task};
use cosmic::iced::widget::image;
use cosmic::iced::{Length, window};
use cosmic::widget::{self, container};
use cosmic::{Application, Element};

use pupstyle_comparison::SliderEngine;
use pupstyle_generation::{Client, StyleField};
use pupstyle_intake::load_candidate;
use pupstyle_session::{
    Effect, Event, LOADING_PHRASES, Phase, PreviewId, Rotation, Session, ToastKind, ToastQueue,
};
use pupstyle_share::{DownloadOutcome, Platform, ShareOutcome};
use pupstyle_widgets::SliderEvent;

use crate::config::StudioConfig;
use crate::message::{Message, style_labels, style_value};
use crate::platform::{SystemClipboard, SystemOpener, WindowCapture};
use crate::subscriptions::{self, Timers};
use crate::theme;
use crate::views;

/// Startup inputs.
#[derive(Clone)]
pub struct Flags {
    pub config: StudioConfig,
    pub client: Client,
}

/// Main studio application state.
pub struct Studio {
    core: Core,
    client: Client,
    session: Session,
    slider: SliderEngine<WindowCapture>,
    /// Decoded previews of staged files, owned until the session releases them.
    previews: HashMap<PreviewId, image::Handle>,
    /// Generated image for the comparison, once fetched.
    artifact_image: Option<image::Handle>,
    examples: Vec<image::Handle>,
    carousel: Rotation,
    phrases: Rotation,
    toasts: ToastQueue,
    clipboard: SystemClipboard,
    scenario_labels: Vec<String>,
    clothing_labels: Vec<String>,
    downloading: bool,
}

/// Runs a future on the app executor and feeds its message back.
fn spawn<F>(fut: F) -> Task<Message>
where
    F: Future<Output = Message> + Send + 'static,
{
    cosmic::task::future(async move { cosmic::Action::App(fut.await) })
}

impl Application for Studio {
    type Executor = cosmic::executor::Default;
    type Message = Message;
    type Flags = Flags;

    const APP_ID: &'static str = "com.goodnatured.PupstyleStudio";

    fn init(mut core: Core, flags: Flags) -> (Self, Task<Message>) {
        core.window.show_headerbar = false;

        let Flags { config, client } = flags;
        let examples: Vec<image::Handle> = config
            .example_images
            .iter()
            .map(image::Handle::from_path)
            .collect();
        tracing::info!(count = examples.len(), "example images configured");

        let app = Self {
            core,
            client,
            session: Session::new(config.intake_policy()),
            slider: SliderEngine::new(WindowCapture::default()),
            previews: HashMap::new(),
            artifact_image: None,
            carousel: Rotation::new(examples.len()),
            examples,
            phrases: Rotation::new(LOADING_PHRASES.len()),
            toasts: ToastQueue::new(),
            clipboard: SystemClipboard::default(),
            scenario_labels: style_labels(StyleField::Scenario),
            clothing_labels: style_labels(StyleField::Clothing),
            downloading: false,
        };

        (app, Task::none())
    }

    fn core(&self) -> &Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut Core {
        &mut self.core
    }

    fn on_close_requested(&self, _id: window::Id) -> Option<Message> {
        Some(Message::Teardown)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::PickFile => {
                if self.session.phase() != Phase::Upload {
                    return Task::none();
                }
                return spawn(async {
                    let picked = rfd::AsyncFileDialog::new()
                        .set_title("Choose a photo of your dog")
                        .add_filter("Images", &["png", "jpg", "jpeg"])
                        .add_filter("All files", &["*"])
                        .pick_file()
                        .await
                        .map(|h| h.path().to_path_buf());
                    Message::FilePicked(picked)
                });
            }
            Message::FilePicked(Some(path)) => {
                return spawn(async move {
                    let loaded = load_candidate(&path).await.map_err(|e| e.to_string());
                    Message::FileLoaded(loaded)
                });
            }
            Message::FilePicked(None) => {
                tracing::debug!("file picker dismissed");
            }
            Message::FileLoaded(Ok(candidate)) => return self.dispatch(Event::FileChosen(candidate)),
            Message::FileLoaded(Err(e)) => return self.dispatch(Event::FileUnreadable(e)),
            Message::StyleSelected(field, index) => {
                return self.dispatch(Event::SetStyle(field, style_value(field, index)));
            }
            Message::Generate => return self.dispatch(Event::Generate),
            Message::GenerationFinished(request, result) => {
                let was_loading = self.session.phase() == Phase::Loading;
                let task = self.dispatch(Event::GenerationFinished { request, result });
                if was_loading && self.session.phase() == Phase::Result {
                    return Task::batch([task, self.fetch_artifact_image()]);
                }
                return task;
            }

            Message::CarouselStep(dir) => self.carousel.step(dir),
            Message::CarouselSelect(index) => self.carousel.select(index),
            Message::CarouselTick => self.carousel.advance(),

            Message::PhraseTick => self.phrases.advance(),

            Message::ArtifactLoaded(url, result) => {
                if self.session.artifact_url() != Some(url.as_str()) {
                    tracing::debug!(url = %url, "dropping image for a stale result");
                    return Task::none();
                }
                match result {
                    Ok(bytes) => self.artifact_image = Some(image::Handle::from_bytes(bytes)),
                    Err(e) => {
                        tracing::warn!(url = %url, error = %e, "could not load generated image");
                        self.toasts.push(
                            ToastKind::Info,
                            "Preview unavailable",
                            Some("Use Download to open the image in your browser.".into()),
                        );
                    }
                }
            }
            Message::Slider(event) => return self.on_slider(event),
            Message::ShowBefore => return self.dispatch(Event::ShowBefore),
            Message::ShowAfter => return self.dispatch(Event::ShowAfter),
            Message::Download => return self.download(),
            Message::DownloadFinished(result) => {
                self.downloading = false;
                self.on_download_finished(result);
            }
            Message::Share(platform) => self.share(platform),
            Message::StartOver => {
                self.artifact_image = None;
                return self.dispatch(Event::StartOver);
            }

            Message::CloseToast(id) => {
                self.toasts.dismiss(id);
            }
            Message::ToastTextEdited => {}
            Message::ToastTick => {
                self.toasts.expire(Instant::now());
            }

            Message::Teardown => {
                tracing::info!("window closing, releasing session resources");
                let effects = self.session.teardown();
                let task = self.run_effects(effects);
                self.artifact_image = None;
                return task;
            }
        }
        Task::none()
    }

    fn subscription(&self) -> cosmic::iced::Subscription<Message> {
        subscriptions::timers(Timers::for_state(
            self.session.phase(),
            self.examples.len(),
            self.toasts.len(),
        ))
    }

    fn view(&self) -> Element<'_, Message> {
        let body = match self.session.phase() {
            Phase::Upload => views::upload::view(views::upload::UploadView {
                file_name: self.session.selected_file().map(|f| f.name()),
                preview: self.current_preview(),
                max_upload_mb: self.session.policy().max_bytes / (1024 * 1024),
                type_names: self.session.policy().type_names(),
                style: self.session.style(),
                scenario_labels: &self.scenario_labels,
                clothing_labels: &self.clothing_labels,
                examples: &self.examples,
                carousel: self.carousel,
            }),
            Phase::Loading => views::loading::view(
                self.current_preview(),
                LOADING_PHRASES[self.phrases.index() % LOADING_PHRASES.len()],
            ),
            Phase::Result => views::result::view(views::result::ResultView {
                before: self.current_preview(),
                after: self.artifact_image.as_ref(),
                split: self.session.split(),
                dragging: self.slider.capture().is_active(),
                downloading: self.downloading,
            }),
        };

        let content = widget::column()
            .push(views::header())
            .push(body)
            .push(views::toasts::view(&self.toasts))
            .spacing(24)
            .padding(32)
            .max_width(1000.0);

        container(widget::scrollable(
            container(content)
                .width(Length::Fill)
                .center_x(Length::Fill),
        ))
        .width(Length::Fill)
        .height(Length::Fill)
        .class(cosmic::theme::Container::Custom(Box::new(theme::page_bg)))
        .into()
    }
}

impl Studio {
    /// Feeds an event to the session and performs the resulting effects.
    fn dispatch(&mut self, event: Event) -> Task<Message> {
        let effects = self.session.handle(event);
        self.run_effects(effects)
    }

    fn run_effects(&mut self, effects: Vec<Effect>) -> Task<Message> {
        let mut tasks = Vec::new();
        for effect in effects {
            match effect {
                Effect::CreatePreview { id, file } => {
                    tracing::debug!(preview = id.0, file = %file.name(), "creating preview");
                    self.previews
                        .insert(id, image::Handle::from_bytes(file.bytes().to_vec()));
                }
                Effect::ReleasePreview(id) => {
                    tracing::debug!(preview = id.0, "releasing preview");
                    self.previews.remove(&id);
                }
                Effect::RequestGeneration {
                    request,
                    file,
                    style,
                } => {
                    self.phrases.reset();
                    let client = self.client.clone();
                    tasks.push(spawn(async move {
                        let result = client.generate(&file, &style).await.map_err(Arc::new);
                        Message::GenerationFinished(request, result)
                    }));
                }
                Effect::EndDrag => self.slider.end_drag(),
                Effect::Notify {
                    kind,
                    title,
                    message,
                } => {
                    self.toasts.push(kind, title, message);
                }
            }
        }
        Task::batch(tasks)
    }

    fn current_preview(&self) -> Option<&image::Handle> {
        self.session.preview().and_then(|id| self.previews.get(&id))
    }

    /// Starts loading the generated image for the current result.
    fn fetch_artifact_image(&mut self) -> Task<Message> {
        let Some(url) = self.session.artifact_url().map(str::to_string) else {
            return Task::none();
        };
        self.artifact_image = None;
        let client = self.client.clone();
        spawn(async move {
            let result = client.fetch_artifact(&url).await.map_err(|e| e.to_string());
            Message::ArtifactLoaded(url, result)
        })
    }

    fn on_slider(&mut self, event: SliderEvent) -> Task<Message> {
        if self.session.phase() != Phase::Result {
            self.slider.end_drag();
            return Task::none();
        }
        let split = match event {
            SliderEvent::Press { pointer, viewport } => self.slider.begin_drag(&pointer, &viewport),
            SliderEvent::Move { pointer, viewport } => self.slider.update_drag(&pointer, &viewport),
            SliderEvent::Release => {
                self.slider.end_drag();
                None
            }
        };
        match split {
            Some(split) => self.dispatch(Event::SplitChanged(split)),
            None => Task::none(),
        }
    }

    fn download(&mut self) -> Task<Message> {
        if self.downloading {
            return Task::none();
        }
        let Some(url) = self.session.artifact_url().map(str::to_string) else {
            return Task::none();
        };
        self.downloading = true;
        let client = self.client.clone();

        spawn(async move {
            let result = pupstyle_share::download(
                &client,
                &url,
                |suggested| async move {
                    rfd::AsyncFileDialog::new()
                        .set_title("Save your styled pup")
                        .set_file_name(suggested)
                        .add_filter("PNG image", &["png"])
                        .save_file()
                        .await
                        .map(|h| PathBuf::from(h.path()))
                },
                &SystemOpener,
            )
            .await
            .map_err(|e| e.to_string());
            Message::DownloadFinished(result)
        })
    }

    fn on_download_finished(&mut self, result: Result<DownloadOutcome, String>) {
        match result {
            Ok(DownloadOutcome::Saved { path, .. }) => {
                self.toasts.push(
                    ToastKind::Success,
                    "Image saved",
                    Some(path.display().to_string()),
                );
            }
            Ok(DownloadOutcome::Cancelled) => {}
            Ok(DownloadOutcome::OpenedInBrowser) => {
                self.toasts.push(
                    ToastKind::Info,
                    "Opened in your browser",
                    Some("The download failed, so the image was opened instead.".into()),
                );
            }
            Err(e) => {
                tracing::error!(error = %e, "download fallback failed");
                self.toasts.push(ToastKind::Error, "Download failed", Some(e));
            }
        }
    }

    fn share(&mut self, platform: Platform) {
        let Some(url) = self.session.artifact_url() else {
            return;
        };
        match pupstyle_share::share(platform, url, &mut self.clipboard, &SystemOpener) {
            Ok(ShareOutcome::CaptionCopied) => {
                self.toasts.push(
                    ToastKind::Success,
                    "Caption copied to clipboard!",
                    Some("Paste it when sharing on Instagram.".into()),
                );
            }
            Ok(ShareOutcome::CopyManually(caption)) => {
                self.toasts.push_sticky(
                    ToastKind::Info,
                    "Please copy this caption for Instagram",
                    caption,
                );
            }
            Ok(ShareOutcome::Opened) => {}
            Err(e) => {
                tracing::warn!(error = %e, "share failed");
                self.toasts.push(ToastKind::Error, "Could not open browser", Some(e.to_string()));
            }
        }
    }
}
