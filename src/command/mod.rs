//! The `/lunch` slash command: verify, pick today's stations, build the reply.
mod reply;
mod request;

pub use reply::Envelope;
pub use request::SlashRequest;

use chrono_tz::Tz;
use log::{debug, warn};
use tracing::instrument;

use crate::{
    clock::{Clock, Today},
    config::Config,
    fetch::MenuSource,
    parse::WeeklyMenu,
    signature::SignatureVerifier,
};
use reply::{Attachment, CLOSED, USAGE};

pub struct Dispatcher<S, C> {
    verifier: SignatureVerifier,
    source: S,
    clock: C,
    office: &'static str,
    time_zone: Tz,
}

impl<S: MenuSource, C: Clock> Dispatcher<S, C> {
    pub fn new(config: &Config, source: S, clock: C) -> Self {
        Self {
            verifier: SignatureVerifier::new(config.signing_secret.as_bytes()),
            source,
            clock,
            office: config.office,
            time_zone: config.time_zone,
        }
    }

    #[instrument(skip_all, level = "debug")]
    pub async fn handle(&self, request: &SlashRequest) -> Envelope {
        debug!("{request:?}");

        let verified = request
            .verification_input()
            .is_some_and(|input| self.verifier.verify(&input));
        if !verified {
            warn!("Rejecting request with a missing or invalid signature");
            return Envelope::unauthorized();
        }

        match request.argument() {
            Some(office) if office == self.office => {}
            other => {
                debug!("Unsupported office {other:?}");
                return Envelope::text(USAGE);
            }
        }

        debug!("Getting todays schedule");
        let today = Today::at(self.clock.now(), self.time_zone);
        if today.is_weekend() {
            return Envelope::text(CLOSED);
        }
        debug!("Today is {}", today.label());

        let mut attachments = match WeeklyMenu::load(&self.source).await {
            None => vec![Attachment::fetch_failed()],
            Some(mut menu) => menu.take_day(today.label()).map_or_else(
                || vec![Attachment::nothing_today()],
                |items| items.into_iter().map(Attachment::from).collect(),
            ),
        };
        attachments.push(Attachment::full_menu(self.source.url()));
        Envelope::menu(&attachments)
    }
}
