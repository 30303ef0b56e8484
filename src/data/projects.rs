use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ContentError;
use crate::utils::simulate_latency;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub image: String,
    pub tags: Vec<String>,
    pub category: String,
    pub live: Option<String>,
    pub github: Option<String>,
    pub has_details: bool,
}

impl Project {
    #[allow(clippy::too_many_arguments)]
    fn new(
        id: u32,
        title: &str,
        description: &str,
        image: &str,
        tags: &[&str],
        category: &str,
        live: Option<&str>,
        github: Option<&str>,
        has_details: bool,
    ) -> Self {
        Self {
            id,
            title: title.to_string(),
            description: description.to_string(),
            image: image.to_string(),
            tags: tags.iter().map(|tag| tag.to_string()).collect(),
            category: category.to_string(),
            live: live.map(str::to_string),
            github: github.map(str::to_string),
            has_details,
        }
    }

    pub fn gallery() -> Vec<Self> {
        vec![
            Project::new(
                1,
                "Rajasthani Ludo",
                "An interactive online multiplayer game built with React, Node.js, \
                 Socket.io, MongoDB, and Redis.",
                "/rjludo.png",
                &["React", "Node.js", "Socket.io", "MongoDB", "Redis"],
                "Gaming",
                Some("https://rajasthaniludo.com/"),
                None,
                true,
            ),
            Project::new(
                2,
                "Akadda",
                "Another popular gaming platform with real-time multiplayer \
                 functionality using WebSockets.",
                "/akadda.png",
                &["React", "Node.js", "Socket.io", "MongoDB"],
                "Gaming",
                Some("https://akadda.com/"),
                None,
                true,
            ),
            Project::new(
                3,
                "ShopTrack",
                "Inventory and order dashboard for a regional e-commerce seller, with \
                 live order feeds and sales reports.",
                "/shoptrack.png",
                &["React", "Node.js", "MongoDB", "Redis", "BullMQ"],
                "E-Commerce",
                None,
                Some("https://github.com/ajaygupta899/shoptrack"),
                false,
            ),
            Project::new(
                4,
                "TaskFlow",
                "A team task board with drag-and-drop lanes, activity history, and \
                 email digests.",
                "/taskflow.png",
                &["React", "TypeScript", "Node.js", "MySQL"],
                "Web App",
                None,
                Some("https://github.com/ajaygupta899/taskflow"),
                false,
            ),
            Project::new(
                5,
                "Notify CLI",
                "A small command-line tool that watches log files and pushes alerts \
                 to Slack and email.",
                "/notify.png",
                &["Node.js", "REST API"],
                "Tools",
                None,
                Some("https://github.com/ajaygupta899/notify-cli"),
                false,
            ),
            Project::new(
                6,
                "Portfolio Site",
                "This site: a single-page portfolio with a light/dark theme and \
                 mock-data detail pages.",
                "/portfolio.png",
                &["React", "TypeScript", "CSS"],
                "Web App",
                None,
                Some("https://github.com/ajaygupta899/portfolio"),
                false,
            ),
        ]
    }

    /// Distinct gallery categories in first-seen order.
    pub fn categories() -> Vec<String> {
        let mut seen = Vec::new();
        for project in Self::gallery() {
            if !seen.contains(&project.category) {
                seen.push(project.category);
            }
        }
        seen
    }

    pub fn matches_category(&self, category: &str) -> bool {
        category == "All" || self.category == category
    }
}

pub fn filter_gallery(projects: &[Project], category: &str) -> Vec<Project> {
    projects
        .iter()
        .filter(|project| project.matches_category(category))
        .cloned()
        .collect()
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectDetail {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub content: String,
    pub date: String,
    pub technologies: Vec<String>,
    pub images: Vec<String>,
    pub live: Option<String>,
    pub github: Option<String>,
}

impl ProjectDetail {
    /// Mock fetch by id. Real deployments would hit an API here; the mock
    /// keeps the same async shape and latency.
    pub async fn resolve(id: u32) -> Result<Self, ContentError> {
        simulate_latency(Duration::from_millis(1000)).await;
        Self::lookup(id).ok_or(ContentError::ProjectNotFound(id))
    }

    fn lookup(id: u32) -> Option<Self> {
        match id {
            1 => Some(Self {
                id,
                title: "Rajasthani Ludo".to_string(),
                description: "An interactive online multiplayer game built with React, \
                              Node.js, Socket.io, MongoDB, and Redis."
                    .to_string(),
                content: RAJASTHANI_LUDO_CONTENT.to_string(),
                date: "April 2022 - Present".to_string(),
                technologies: vec![
                    "React".to_string(),
                    "Node.js".to_string(),
                    "Socket.io".to_string(),
                    "MongoDB".to_string(),
                    "Redis".to_string(),
                    "JWT".to_string(),
                    "Express".to_string(),
                ],
                images: vec![
                    "/rjludo.png".to_string(),
                    "/rjludo-board.png".to_string(),
                    "/rjludo-lobby.png".to_string(),
                    "/rjludo-chat.png".to_string(),
                ],
                live: Some("https://rajasthaniludo.com/".to_string()),
                github: Some("https://github.com/ajaygupta899/rajasthani-ludo".to_string()),
            }),
            2 => Some(Self {
                id,
                title: "Akadda".to_string(),
                description: "A gaming platform with real-time multiplayer functionality \
                              using WebSockets."
                    .to_string(),
                content: AKADDA_CONTENT.to_string(),
                date: "January 2023 - Present".to_string(),
                technologies: vec![
                    "React".to_string(),
                    "Node.js".to_string(),
                    "Socket.io".to_string(),
                    "MongoDB".to_string(),
                ],
                images: vec![
                    "/akadda.png".to_string(),
                    "/akadda-lobby.png".to_string(),
                    "/akadda-match.png".to_string(),
                ],
                live: Some("https://akadda.com/".to_string()),
                github: None,
            }),
            _ => None,
        }
    }
}

const RAJASTHANI_LUDO_CONTENT: &str = r#"
<p>Rajasthani Ludo is a modern take on the classic board game, designed to provide a seamless online multiplayer experience. The game features a polished interface, real-time interactions, and advanced gameplay mechanics.</p>

<h2>Key Features</h2>
<ul>
  <li>Real-time multiplayer gameplay using Socket.io</li>
  <li>Private game rooms for playing with friends</li>
  <li>Public matchmaking system</li>
  <li>In-game chat functionality</li>
  <li>User profiles and statistics tracking</li>
  <li>Responsive design for desktop and mobile</li>
</ul>

<h2>Technical Implementation</h2>
<p>The client is built with React, with custom animations for dice rolling and piece movement and a Socket.io client for real-time communication. The server runs Node.js with Express, using MongoDB for persistent storage, Redis for caching and pub/sub messaging between instances, and JWT for session authentication.</p>

<h2>Challenges and Solutions</h2>
<p>Keeping all players on the same game state required a server-authoritative model with client-side prediction, which masks network latency while preventing cheating. Horizontal scaling runs on Redis pub/sub between server instances, and a reconnection window lets players rejoin a game after a dropped connection.</p>

<h2>Results</h2>
<ul>
  <li>Over 10,000 registered users</li>
  <li>Around 1,000 concurrent players during peak hours</li>
  <li>An average of 5 games per session</li>
  <li>60% of users return within a week</li>
</ul>
"#;

const AKADDA_CONTENT: &str = r#"
<p>Akadda is a multiplayer gaming platform focused on quick casual matches. Players join public lobbies or invite friends into private rooms, and every move is mirrored to all participants over WebSockets.</p>

<h2>Key Features</h2>
<ul>
  <li>Lobby and matchmaking flows backed by Socket.io rooms</li>
  <li>Spectator mode for ongoing matches</li>
  <li>Leaderboards refreshed after every game</li>
  <li>Mobile-first responsive layout</li>
</ul>

<h2>Technical Implementation</h2>
<p>The stack mirrors Rajasthani Ludo: a React front end, Node.js with Express on the server, and MongoDB for accounts, match history, and leaderboard data. Match state lives in memory per room and is checkpointed to the database at the end of each game.</p>
"#;
