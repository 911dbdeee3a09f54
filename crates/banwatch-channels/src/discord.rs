//! Discord channel.
//!
//! Receives events over the Gateway websocket and replies through the REST
//! API. Docs: <https://discord.com/developers/docs/topics/gateway> and
//! <https://discord.com/developers/docs/resources/message>.

use async_trait::async_trait;
use banwatch_core::{
    error::BanwatchError,
    message::{Embed, IncomingMessage, OutgoingMessage},
    traits::Channel,
};
use dashmap::DashMap;
use futures_util::{SinkExt, StreamExt};
use serde::Deserialize;
use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpStream;
use tokio::sync::{mpsc, Mutex};
use tokio_tungstenite::tungstenite::protocol::Message;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};
use tracing::{debug, error, info, warn};
use uuid::Uuid;

const API_BASE: &str = "https://discord.com/api/v10";
const GATEWAY_URL: &str = "wss://gateway.discord.gg/?v=10&encoding=json";

// GUILDS | GUILD_MESSAGES | MESSAGE_CONTENT
const INTENTS: u64 = 1 | (1 << 9) | (1 << 15);

const OP_DISPATCH: u8 = 0;
const OP_HEARTBEAT: u8 = 1;
const OP_IDENTIFY: u8 = 2;
const OP_RECONNECT: u8 = 7;
const OP_INVALID_SESSION: u8 = 9;
const OP_HELLO: u8 = 10;
const OP_HEARTBEAT_ACK: u8 = 11;

/// The ADMINISTRATOR permission bit.
const ADMINISTRATOR: u64 = 1 << 3;

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Discord channel: Gateway websocket in, REST out.
pub struct DiscordChannel {
    token: String,
    client: reqwest::Client,
    state: Arc<DiscordShared>,
}

/// State shared between the gateway task and the channel handle.
#[derive(Default)]
struct DiscordShared {
    identity: Mutex<BotIdentity>,
    /// Guilds the bot is in, keyed by guild id, learned from GUILD_CREATE.
    guilds: DashMap<String, GuildMeta>,
    running: AtomicBool,
}

/// Who the platform says we are, learned from READY.
#[derive(Debug, Default, Clone)]
struct BotIdentity {
    user_id: Option<String>,
    display_name: Option<String>,
}

/// Cached facts about one guild.
#[derive(Debug, Clone)]
struct GuildMeta {
    name: String,
    owner_id: String,
    /// Roles carrying the ADMINISTRATOR permission bit.
    admin_roles: HashSet<String>,
}

impl GuildMeta {
    fn from_guild(guild: &ApiGuild) -> Self {
        let admin_roles = guild
            .roles
            .iter()
            .filter(|r| parse_permissions(&r.permissions) & ADMINISTRATOR != 0)
            .map(|r| r.id.clone())
            .collect();
        Self {
            name: guild.name.clone(),
            owner_id: guild.owner_id.clone(),
            admin_roles,
        }
    }

    /// Owner, or any role with the administrator bit.
    fn is_admin(&self, user_id: &str, member_roles: &[String]) -> bool {
        if self.owner_id == user_id {
            return true;
        }
        member_roles.iter().any(|r| self.admin_roles.contains(r))
    }
}

// --- Discord API types ---

#[derive(Debug, Deserialize)]
struct GatewayPayload {
    op: u8,
    #[serde(default)]
    d: Option<serde_json::Value>,
    #[serde(default)]
    s: Option<u64>,
    #[serde(default)]
    t: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Hello {
    heartbeat_interval: u64,
}

#[derive(Debug, Deserialize)]
struct Ready {
    user: ApiUser,
}

#[derive(Debug, Deserialize)]
struct ApiUser {
    id: String,
    username: String,
    #[serde(default)]
    discriminator: Option<String>,
    #[serde(default)]
    avatar: Option<String>,
    #[serde(default)]
    bot: bool,
}

impl ApiUser {
    /// "name#1234" for legacy accounts, plain username otherwise.
    fn display_name(&self) -> String {
        match self.discriminator.as_deref() {
            Some(d) if d != "0" && !d.is_empty() => format!("{}#{d}", self.username),
            _ => self.username.clone(),
        }
    }

    /// CDN URL for the user's avatar, falling back to a default avatar.
    fn avatar_url(&self) -> Option<String> {
        if let Some(ref hash) = self.avatar {
            return Some(format!(
                "https://cdn.discordapp.com/avatars/{}/{hash}.png",
                self.id
            ));
        }
        let n: u64 = self.id.parse().ok()?;
        Some(format!(
            "https://cdn.discordapp.com/embed/avatars/{}.png",
            (n >> 22) % 6
        ))
    }
}

#[derive(Debug, Deserialize)]
struct ApiGuild {
    id: String,
    name: String,
    owner_id: String,
    #[serde(default)]
    roles: Vec<ApiRole>,
}

#[derive(Debug, Deserialize)]
struct ApiRole {
    id: String,
    /// Permission bitset, sent as a decimal string.
    #[serde(default)]
    permissions: String,
}

#[derive(Debug, Deserialize)]
struct GuildDelete {
    id: String,
    /// True means a temporary outage, not a removal.
    #[serde(default)]
    unavailable: bool,
}

#[derive(Debug, Deserialize)]
struct ApiMember {
    #[serde(default)]
    roles: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ApiMessage {
    channel_id: String,
    #[serde(default)]
    guild_id: Option<String>,
    #[serde(default)]
    content: String,
    author: ApiUser,
    #[serde(default)]
    member: Option<ApiMember>,
    #[serde(default)]
    timestamp: Option<chrono::DateTime<chrono::Utc>>,
}

fn parse_permissions(raw: &str) -> u64 {
    raw.parse().unwrap_or(0)
}

impl DiscordChannel {
    /// Create a new Discord channel from a resolved bot token.
    pub fn new(token: String) -> Self {
        Self {
            token,
            client: reqwest::Client::new(),
            state: Arc::new(DiscordShared::default()),
        }
    }

    fn auth_header(&self) -> String {
        format!("Bot {}", self.token)
    }

    /// POST a message to a channel, as JSON or as multipart when a file
    /// rides along.
    async fn post_message(
        &self,
        channel_id: &str,
        message: &OutgoingMessage,
    ) -> Result<(), BanwatchError> {
        let url = format!("{API_BASE}/channels/{channel_id}/messages");

        let mut body = serde_json::json!({ "content": message.text });
        if let Some(ref embed) = message.embed {
            body["embeds"] = serde_json::json!([embed_to_json(embed)]);
        }

        let request = self.client.post(&url).header("Authorization", self.auth_header());

        let resp = if let Some(ref attachment) = message.attachment {
            body["attachments"] =
                serde_json::json!([{ "id": 0, "filename": attachment.filename }]);

            let part = reqwest::multipart::Part::bytes(attachment.data.clone())
                .file_name(attachment.filename.clone())
                .mime_str(mime_for(&attachment.filename))
                .map_err(|e| BanwatchError::Channel(format!("mime error: {e}")))?;

            let form = reqwest::multipart::Form::new()
                .text("payload_json", body.to_string())
                .part("files[0]", part);

            request.multipart(form).send().await
        } else {
            request.json(&body).send().await
        }
        .map_err(|e| BanwatchError::Channel(format!("discord send failed: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            return Err(BanwatchError::Channel(format!(
                "discord api returned {status}: {text}"
            )));
        }

        Ok(())
    }
}

/// Map a core embed onto the Discord wire shape.
///
/// Labeled fields become bold bullet lines in the description, the way the
/// result cards are meant to read.
fn embed_to_json(embed: &Embed) -> serde_json::Value {
    let description = embed
        .fields
        .iter()
        .map(|f| format!("**\u{2022} {} :** {}", f.name, f.value))
        .collect::<Vec<_>>()
        .join("\n");

    let mut obj = serde_json::json!({
        "title": embed.title,
        "color": embed.color,
        "description": description,
    });
    if let Some(ref name) = embed.image_attachment {
        obj["image"] = serde_json::json!({ "url": format!("attachment://{name}") });
    }
    if let Some(ref url) = embed.thumbnail_url {
        obj["thumbnail"] = serde_json::json!({ "url": url });
    }
    if let Some(ref footer) = embed.footer {
        obj["footer"] = serde_json::json!({ "text": footer });
    }
    if let Some(ts) = embed.timestamp {
        obj["timestamp"] = serde_json::json!(ts.to_rfc3339());
    }
    obj
}

fn mime_for(filename: &str) -> &'static str {
    if filename.ends_with(".gif") {
        "image/gif"
    } else if filename.ends_with(".png") {
        "image/png"
    } else if filename.ends_with(".jpg") || filename.ends_with(".jpeg") {
        "image/jpeg"
    } else {
        "application/octet-stream"
    }
}

#[async_trait]
impl Channel for DiscordChannel {
    fn name(&self) -> &str {
        "discord"
    }

    async fn start(&self) -> Result<mpsc::Receiver<IncomingMessage>, BanwatchError> {
        let (tx, rx) = mpsc::channel(64);

        self.state.running.store(true, Ordering::SeqCst);
        let token = self.token.clone();
        let state = self.state.clone();

        info!("Discord channel connecting to gateway...");

        tokio::spawn(async move {
            run_gateway(token, state, tx).await;
        });

        Ok(rx)
    }

    async fn send_typing(&self, target: &str) -> Result<(), BanwatchError> {
        let url = format!("{API_BASE}/channels/{target}/typing");
        let resp = self
            .client
            .post(&url)
            .header("Authorization", self.auth_header())
            .send()
            .await
            .map_err(|e| BanwatchError::Channel(format!("discord typing failed: {e}")))?;

        if !resp.status().is_success() {
            debug!("discord typing got {}", resp.status());
        }
        Ok(())
    }

    async fn send(&self, message: OutgoingMessage) -> Result<(), BanwatchError> {
        let channel_id = message
            .reply_target
            .as_deref()
            .ok_or_else(|| BanwatchError::Channel("no reply_target on outgoing message".into()))?
            .to_string();

        self.post_message(&channel_id, &message).await
    }

    async fn guild_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.state.guilds.iter().map(|g| g.name.clone()).collect();
        names.sort();
        names
    }

    async fn bot_name(&self) -> Option<String> {
        self.state.identity.lock().await.display_name.clone()
    }

    async fn stop(&self) -> Result<(), BanwatchError> {
        self.state.running.store(false, Ordering::SeqCst);
        info!("Discord channel stopped");
        Ok(())
    }
}

/// How one gateway session ended.
enum SessionEnd {
    /// The socket closed, with the server's close code when it sent one.
    Closed(Option<u16>),
    /// Nobody is listening for messages anymore; do not reconnect.
    ReceiverDropped,
}

/// Close codes a retry cannot fix: bad token, sharding misconfiguration,
/// bad or disallowed intents.
fn close_is_fatal(code: u16) -> bool {
    matches!(code, 4004 | 4010..=4014)
}

/// Outer connection loop: reconnect with capped exponential backoff until
/// the channel is stopped or the server closes with a fatal code. Only a
/// session that made it past READY resets the backoff.
async fn run_gateway(token: String, state: Arc<DiscordShared>, tx: mpsc::Sender<IncomingMessage>) {
    let mut backoff_secs: u64 = 1;

    while state.running.load(Ordering::SeqCst) {
        let mut saw_ready = false;
        let end = gateway_session(&token, &state, &tx, &mut saw_ready).await;

        if !state.running.load(Ordering::SeqCst) {
            return;
        }
        if saw_ready {
            backoff_secs = 1;
        }

        match end {
            Ok(SessionEnd::ReceiverDropped) => {
                info!("discord channel receiver dropped, stopping gateway");
                return;
            }
            Ok(SessionEnd::Closed(Some(code))) if close_is_fatal(code) => {
                error!(
                    "discord gateway closed with code {code}, giving up; \
                     check the bot token and intents"
                );
                return;
            }
            Ok(SessionEnd::Closed(_)) => {
                info!("discord gateway disconnected, reconnecting in {backoff_secs}s");
            }
            Err(e) => {
                error!("discord gateway error (retry in {backoff_secs}s): {e}");
            }
        }

        tokio::time::sleep(Duration::from_secs(backoff_secs)).await;
        backoff_secs = (backoff_secs * 2).min(60);
    }
}

/// One websocket session: HELLO, IDENTIFY, then heartbeats and dispatches
/// until something ends it. Sets `saw_ready` once the server acknowledges
/// the IDENTIFY with READY.
async fn gateway_session(
    token: &str,
    state: &DiscordShared,
    tx: &mpsc::Sender<IncomingMessage>,
    saw_ready: &mut bool,
) -> Result<SessionEnd, BanwatchError> {
    let (mut ws, _) = connect_async(GATEWAY_URL)
        .await
        .map_err(|e| BanwatchError::Channel(format!("discord gateway connect failed: {e}")))?;

    // First frame must be HELLO carrying the heartbeat interval.
    let hello = match read_payload(&mut ws).await? {
        Some(p) if p.op == OP_HELLO => p,
        Some(p) => {
            return Err(BanwatchError::Channel(format!(
                "discord gateway sent op {} before HELLO",
                p.op
            )))
        }
        None => return Err(BanwatchError::Channel("discord gateway closed before HELLO".into())),
    };
    let hello: Hello = parse_event(&hello, "HELLO")
        .ok_or_else(|| BanwatchError::Channel("discord HELLO without heartbeat interval".into()))?;

    send_json(
        &mut ws,
        &serde_json::json!({
            "op": OP_IDENTIFY,
            "d": {
                "token": token,
                "intents": INTENTS,
                "properties": {
                    "os": std::env::consts::OS,
                    "browser": "banwatch",
                    "device": "banwatch",
                },
            },
        }),
    )
    .await?;

    let period = Duration::from_millis(hello.heartbeat_interval);
    let mut heartbeat = tokio::time::interval_at(tokio::time::Instant::now() + period, period);
    let mut last_seq: Option<u64> = None;

    loop {
        if !state.running.load(Ordering::SeqCst) {
            let _ = ws.close(None).await;
            return Ok(SessionEnd::Closed(None));
        }

        tokio::select! {
            _ = heartbeat.tick() => {
                send_json(&mut ws, &serde_json::json!({ "op": OP_HEARTBEAT, "d": last_seq })).await?;
            }
            frame = ws.next() => {
                let msg = match frame {
                    Some(Ok(m)) => m,
                    Some(Err(e)) => {
                        return Err(BanwatchError::Channel(format!("discord gateway read failed: {e}")));
                    }
                    None => return Ok(SessionEnd::Closed(None)),
                };

                if let Message::Close(frame) = &msg {
                    return Ok(SessionEnd::Closed(frame.as_ref().map(|f| u16::from(f.code))));
                }
                if msg.is_ping() || msg.is_pong() {
                    continue;
                }
                let Message::Text(text) = msg else { continue };

                let payload: GatewayPayload = match serde_json::from_str(&text) {
                    Ok(p) => p,
                    Err(e) => {
                        warn!("discord: unparseable gateway frame: {e}");
                        continue;
                    }
                };
                if let Some(s) = payload.s {
                    last_seq = Some(s);
                }

                match payload.op {
                    OP_DISPATCH => {
                        if payload.t.as_deref() == Some("READY") {
                            *saw_ready = true;
                        }
                        if !handle_dispatch(&payload, state, tx).await {
                            return Ok(SessionEnd::ReceiverDropped);
                        }
                    }
                    // Server wants a heartbeat right now.
                    OP_HEARTBEAT => {
                        send_json(&mut ws, &serde_json::json!({ "op": OP_HEARTBEAT, "d": last_seq })).await?;
                    }
                    OP_RECONNECT | OP_INVALID_SESSION => {
                        info!("discord gateway requested a reconnect (op {})", payload.op);
                        let _ = ws.close(None).await;
                        return Ok(SessionEnd::Closed(None));
                    }
                    OP_HEARTBEAT_ACK => {}
                    other => debug!("discord: unhandled gateway op {other}"),
                }
            }
        }
    }
}

/// Route one dispatch event. Returns false when the message receiver is
/// gone and the session should end for good.
async fn handle_dispatch(
    payload: &GatewayPayload,
    state: &DiscordShared,
    tx: &mpsc::Sender<IncomingMessage>,
) -> bool {
    match payload.t.as_deref() {
        Some("READY") => {
            if let Some(ready) = parse_event::<Ready>(payload, "READY") {
                let name = ready.user.display_name();
                info!("discord connected as {name}");
                let mut identity = state.identity.lock().await;
                identity.user_id = Some(ready.user.id);
                identity.display_name = Some(name);
            }
        }
        Some("GUILD_CREATE") => {
            if let Some(guild) = parse_event::<ApiGuild>(payload, "GUILD_CREATE") {
                debug!("discord: joined guild {} ({})", guild.name, guild.id);
                state.guilds.insert(guild.id.clone(), GuildMeta::from_guild(&guild));
            }
        }
        Some("GUILD_DELETE") => {
            if let Some(gone) = parse_event::<GuildDelete>(payload, "GUILD_DELETE") {
                if !gone.unavailable {
                    state.guilds.remove(&gone.id);
                }
            }
        }
        Some("MESSAGE_CREATE") => {
            let Some(msg) = parse_event::<ApiMessage>(payload, "MESSAGE_CREATE") else {
                return true;
            };

            // Never react to bots, ourselves included.
            if msg.author.bot {
                return true;
            }
            {
                let identity = state.identity.lock().await;
                if identity.user_id.as_deref() == Some(msg.author.id.as_str()) {
                    return true;
                }
            }

            let sender_is_admin = msg
                .guild_id
                .as_deref()
                .and_then(|gid| state.guilds.get(gid))
                .map(|meta| {
                    let roles = msg.member.as_ref().map(|m| m.roles.as_slice()).unwrap_or(&[]);
                    meta.is_admin(&msg.author.id, roles)
                })
                .unwrap_or(false);

            let incoming = IncomingMessage {
                id: Uuid::new_v4(),
                channel: "discord".to_string(),
                sender_id: msg.author.id.clone(),
                sender_name: Some(msg.author.display_name()),
                sender_mention: format!("<@{}>", msg.author.id),
                text: msg.content,
                timestamp: msg.timestamp.unwrap_or_else(chrono::Utc::now),
                guild_id: msg.guild_id,
                reply_target: Some(msg.channel_id),
                sender_is_admin,
                avatar_url: msg.author.avatar_url(),
            };

            if tx.send(incoming).await.is_err() {
                return false;
            }
        }
        _ => {}
    }
    true
}

fn parse_event<T: serde::de::DeserializeOwned>(payload: &GatewayPayload, event: &str) -> Option<T> {
    match payload.d.clone().map(serde_json::from_value) {
        Some(Ok(v)) => Some(v),
        Some(Err(e)) => {
            warn!("discord: bad {event} payload: {e}");
            None
        }
        None => None,
    }
}

async fn send_json(ws: &mut WsStream, value: &serde_json::Value) -> Result<(), BanwatchError> {
    ws.send(Message::Text(value.to_string()))
        .await
        .map_err(|e| BanwatchError::Channel(format!("discord gateway send failed: {e}")))
}

/// Read frames until a JSON payload or the end of the stream.
async fn read_payload(ws: &mut WsStream) -> Result<Option<GatewayPayload>, BanwatchError> {
    while let Some(frame) = ws.next().await {
        let msg = frame
            .map_err(|e| BanwatchError::Channel(format!("discord gateway read failed: {e}")))?;
        if msg.is_close() {
            return Ok(None);
        }
        let Message::Text(text) = msg else { continue };
        // A mangled handshake frame fails the session; mid-session frames
        // are handled more tolerantly in the select loop.
        let payload = serde_json::from_str(&text)?;
        return Ok(Some(payload));
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use banwatch_core::message::EmbedField;

    #[test]
    fn test_intents_cover_guild_messages_and_content() {
        assert_eq!(INTENTS, 33281);
    }

    #[test]
    fn test_hello_payload_parses() {
        let json = r#"{"op":10,"d":{"heartbeat_interval":41250},"s":null,"t":null}"#;
        let payload: GatewayPayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.op, OP_HELLO);
        let hello: Hello = parse_event(&payload, "HELLO").unwrap();
        assert_eq!(hello.heartbeat_interval, 41250);
    }

    #[test]
    fn test_message_create_parses() {
        let json = r#"{
            "op": 0,
            "s": 42,
            "t": "MESSAGE_CREATE",
            "d": {
                "id": "111",
                "channel_id": "222",
                "guild_id": "333",
                "content": "!check 123456789",
                "timestamp": "2024-05-04T10:00:00.000000+00:00",
                "author": {
                    "id": "444",
                    "username": "player",
                    "discriminator": "0",
                    "avatar": "abcdef",
                    "bot": false
                },
                "member": { "roles": ["555"] }
            }
        }"#;
        let payload: GatewayPayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.s, Some(42));
        let msg: ApiMessage = parse_event(&payload, "MESSAGE_CREATE").unwrap();
        assert_eq!(msg.channel_id, "222");
        assert_eq!(msg.guild_id.as_deref(), Some("333"));
        assert_eq!(msg.content, "!check 123456789");
        assert_eq!(msg.author.username, "player");
        assert!(!msg.author.bot);
        assert_eq!(msg.member.unwrap().roles, vec!["555"]);
        assert!(msg.timestamp.is_some());
    }

    #[test]
    fn test_guild_meta_collects_admin_roles() {
        let json = r#"{
            "id": "333",
            "name": "Test Guild",
            "owner_id": "1",
            "roles": [
                {"id": "10", "permissions": "8"},
                {"id": "11", "permissions": "104320577"},
                {"id": "12", "permissions": "2048"},
                {"id": "13", "permissions": "not-a-number"}
            ]
        }"#;
        let guild: ApiGuild = serde_json::from_str(json).unwrap();
        let meta = GuildMeta::from_guild(&guild);

        assert_eq!(meta.name, "Test Guild");
        // 8 has only the admin bit; 104320577 does not include it; 2048 is
        // SEND_MESSAGES; garbage parses as no permissions.
        assert!(meta.admin_roles.contains("10"));
        assert!(!meta.admin_roles.contains("11"));
        assert!(!meta.admin_roles.contains("12"));
        assert!(!meta.admin_roles.contains("13"));
    }

    #[test]
    fn test_owner_is_admin_without_roles() {
        let guild: ApiGuild = serde_json::from_str(
            r#"{"id":"333","name":"G","owner_id":"1","roles":[{"id":"10","permissions":"8"}]}"#,
        )
        .unwrap();
        let meta = GuildMeta::from_guild(&guild);

        assert!(meta.is_admin("1", &[]));
        assert!(meta.is_admin("2", &["10".to_string()]));
        assert!(!meta.is_admin("2", &["99".to_string()]));
        assert!(!meta.is_admin("2", &[]));
    }

    #[test]
    fn test_avatar_url_prefers_uploaded_avatar() {
        let user: ApiUser = serde_json::from_str(
            r#"{"id":"444","username":"player","avatar":"abcdef"}"#,
        )
        .unwrap();
        assert_eq!(
            user.avatar_url().unwrap(),
            "https://cdn.discordapp.com/avatars/444/abcdef.png"
        );

        let bare: ApiUser =
            serde_json::from_str(r#"{"id":"4194304","username":"player"}"#).unwrap();
        // 4194304 >> 22 == 1
        assert_eq!(
            bare.avatar_url().unwrap(),
            "https://cdn.discordapp.com/embed/avatars/1.png"
        );
    }

    #[test]
    fn test_display_name_handles_legacy_discriminator() {
        let legacy: ApiUser =
            serde_json::from_str(r#"{"id":"1","username":"old","discriminator":"1234"}"#).unwrap();
        assert_eq!(legacy.display_name(), "old#1234");

        let modern: ApiUser =
            serde_json::from_str(r#"{"id":"2","username":"new","discriminator":"0"}"#).unwrap();
        assert_eq!(modern.display_name(), "new");
    }

    #[test]
    fn test_embed_to_json_flattens_fields() {
        let embed = Embed {
            title: "Title".to_string(),
            color: 0xFF0000,
            fields: vec![
                EmbedField::new("Reason", "cheats"),
                EmbedField::new("Region", "`EU`"),
            ],
            thumbnail_url: Some("https://cdn.example/av.png".to_string()),
            image_attachment: Some("banned.gif".to_string()),
            footer: Some("footer text".to_string()),
            timestamp: None,
        };
        let json = embed_to_json(&embed);

        assert_eq!(json["title"], "Title");
        assert_eq!(json["color"], 0xFF0000);
        assert_eq!(
            json["description"],
            "**\u{2022} Reason :** cheats\n**\u{2022} Region :** `EU`"
        );
        assert_eq!(json["image"]["url"], "attachment://banned.gif");
        assert_eq!(json["thumbnail"]["url"], "https://cdn.example/av.png");
        assert_eq!(json["footer"]["text"], "footer text");
        assert!(json.get("timestamp").is_none());
    }

    #[test]
    fn test_mime_for_known_extensions() {
        assert_eq!(mime_for("banned.gif"), "image/gif");
        assert_eq!(mime_for("avatar.png"), "image/png");
        assert_eq!(mime_for("photo.jpeg"), "image/jpeg");
        assert_eq!(mime_for("data.bin"), "application/octet-stream");
    }

    #[test]
    fn test_guild_delete_outage_is_not_removal() {
        let outage: GuildDelete =
            serde_json::from_str(r#"{"id":"333","unavailable":true}"#).unwrap();
        assert!(outage.unavailable);

        let removed: GuildDelete = serde_json::from_str(r#"{"id":"333"}"#).unwrap();
        assert!(!removed.unavailable);
    }

    #[test]
    fn test_fatal_close_codes_stop_reconnecting() {
        // Bad token, sharding misconfiguration, bad or disallowed intents.
        for code in [4004, 4010, 4011, 4012, 4013, 4014] {
            assert!(close_is_fatal(code), "{code} is not worth retrying");
        }
        // Normal closure and resumable gateway hiccups keep the loop alive.
        for code in [1000, 1001, 4000, 4007, 4008, 4009] {
            assert!(!close_is_fatal(code), "{code} should reconnect");
        }
    }

    #[test]
    fn test_bad_handshake_json_is_a_serialization_error() {
        let err = serde_json::from_str::<GatewayPayload>("{not json")
            .map_err(BanwatchError::from)
            .unwrap_err();
        assert!(matches!(err, BanwatchError::Serialization(_)));
    }
}
