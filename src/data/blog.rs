use std::time::Duration;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ContentError;
use crate::utils::simulate_latency;

const WORDS_PER_MINUTE: usize = 200;

lazy_static::lazy_static! {
    static ref MARKUP: Regex = Regex::new(r"<[^>]+>").expect("valid markup pattern");
}

/// Word-count estimate over the markup body, rounded up to a whole minute.
pub fn estimated_read_time(content: &str) -> u32 {
    let text = MARKUP.replace_all(content, " ");
    let words = text.split_whitespace().count();
    (words.div_ceil(WORDS_PER_MINUTE)).max(1) as u32
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlogPreview {
    pub id: u32,
    pub title: String,
    pub excerpt: String,
    pub date: String,
    pub read_time: String,
    pub category: String,
    pub image: String,
}

impl BlogPreview {
    fn new(
        id: u32,
        title: &str,
        excerpt: &str,
        date: &str,
        read_time: &str,
        category: &str,
    ) -> Self {
        Self {
            id,
            title: title.to_string(),
            excerpt: excerpt.to_string(),
            date: date.to_string(),
            read_time: read_time.to_string(),
            category: category.to_string(),
            image: "https://via.placeholder.com/800x600".to_string(),
        }
    }

    pub fn recent() -> Vec<Self> {
        vec![
            BlogPreview::new(
                1,
                "Building Real-time Multiplayer Games with Socket.io",
                "Learn how to create engaging multiplayer experiences using WebSockets \
                 and Socket.io with React and Node.js.",
                "June 15, 2023",
                "8 min",
                "Web Development",
            ),
            BlogPreview::new(
                2,
                "Optimizing MongoDB for High-Traffic Applications",
                "Discover advanced techniques to scale your MongoDB database for \
                 applications with millions of users.",
                "May 23, 2023",
                "10 min",
                "Databases",
            ),
            BlogPreview::new(
                3,
                "The Complete Guide to Redis Caching in Node.js",
                "Learn how to implement efficient caching strategies using Redis to \
                 dramatically improve your application's performance.",
                "April 10, 2023",
                "12 min",
                "Performance",
            ),
        ]
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlogEntry {
    pub id: u32,
    pub title: String,
    pub content: String,
    pub date: String,
    pub category: String,
    pub author: String,
    pub image: String,
}

impl BlogEntry {
    pub async fn resolve(id: u32) -> Result<Self, ContentError> {
        simulate_latency(Duration::from_millis(1000)).await;
        Self::lookup(id).ok_or(ContentError::BlogPostNotFound(id))
    }

    pub fn read_time(&self) -> u32 {
        estimated_read_time(&self.content)
    }

    fn lookup(id: u32) -> Option<Self> {
        let (title, content, date, category) = match id {
            1 => (
                "Building Real-time Multiplayer Games with Socket.io",
                SOCKETIO_CONTENT,
                "June 15, 2023",
                "Web Development",
            ),
            2 => (
                "Optimizing MongoDB for High-Traffic Applications",
                MONGODB_CONTENT,
                "May 23, 2023",
                "Databases",
            ),
            3 => (
                "The Complete Guide to Redis Caching in Node.js",
                REDIS_CONTENT,
                "April 10, 2023",
                "Performance",
            ),
            _ => return None,
        };
        Some(Self {
            id,
            title: title.to_string(),
            content: content.to_string(),
            date: date.to_string(),
            category: category.to_string(),
            author: "Ajay Gupta".to_string(),
            image: "https://via.placeholder.com/1200x600".to_string(),
        })
    }
}

const SOCKETIO_CONTENT: &str = r#"
<p>In the world of online gaming, real-time interaction is essential for creating engaging and immersive experiences. Socket.io, combined with React and Node.js, offers a powerful toolkit for building real-time multiplayer games that can handle thousands of concurrent users.</p>

<h2>Understanding WebSockets and Socket.io</h2>
<p>WebSockets provide a persistent connection between a client and server, allowing for real-time, bi-directional communication. Socket.io is a library that enables real-time, event-based communication in web applications, building on the WebSocket protocol while providing fallbacks for older browsers.</p>

<h2>Setting Up the Backend</h2>
<p>The first step in creating a multiplayer game is setting up a robust backend that can handle real-time connections. Node.js with Express and Socket.io creates a solid foundation: the server listens for room joins, validates each move, and broadcasts it to the other players in the same room.</p>

<h2>Building the React Frontend</h2>
<p>On the client side, React provides a flexible framework for building interactive user interfaces. A game board component joins its room on mount, listens for moves from other players, applies them to local state, and emits the local player's moves back to the server.</p>

<h2>Optimizing for Performance</h2>
<p>Real-time multiplayer games require careful optimization to ensure smooth gameplay for all players. Key techniques include compact message payloads, Redis for pub/sub messaging and cached game state, room-scoped broadcasts, WebSocket message compression, and worker threads for CPU-heavy work.</p>

<h2>Handling Latency and Synchronization</h2>
<p>One of the biggest challenges in multiplayer games is dealing with network latency and keeping all players synchronized. Client-side prediction and server reconciliation create a smooth experience despite network delays.</p>

<h2>Conclusion</h2>
<p>Building real-time multiplayer games with Socket.io, React, and Node.js offers a powerful combination for creating engaging online experiences. Understanding the core principles of real-time communication and implementing robust synchronization strategies lets developers ship multiplayer games that hold up under real traffic.</p>
"#;

const MONGODB_CONTENT: &str = r#"
<p>MongoDB scales comfortably until the day it doesn't. Once an application crosses a few million documents and a few thousand operations per second, default settings start to show their limits. This post walks through the levers that matter most.</p>

<h2>Indexes First</h2>
<p>Most slow queries are missing an index or using the wrong one. Compound indexes should match the query's equality fields first, then sort fields, then range fields. The explain plan tells you whether a query is scanning the index or the whole collection.</p>

<h2>Schema for the Read Path</h2>
<p>Document databases reward designing around how data is read, not how it is normalized. Embedding works well for one-to-few relationships read together; references work better when the related side grows without bound.</p>

<h2>Sharding and Replica Sets</h2>
<p>Replica sets buy read scaling and failover; sharding buys write scaling. Pick a shard key with high cardinality and even write distribution, because changing it later is painful.</p>

<h2>Conclusion</h2>
<p>Measure with the profiler, index for the real query shapes, and shard before write latency forces the decision for you.</p>
"#;

const REDIS_CONTENT: &str = r#"
<p>Redis is the workhorse of caching layers in Node.js services. Used well, it absorbs most read traffic before it reaches the database; used carelessly, it serves stale data and hides bugs.</p>

<h2>Cache-Aside in Practice</h2>
<p>The cache-aside pattern is the default: read from Redis, fall through to the database on a miss, then write the result back with a TTL. Keep TTLs short for data that changes and long for data that doesn't.</p>

<h2>Invalidation</h2>
<p>Explicit invalidation on write beats waiting for TTL expiry when correctness matters. Publish invalidation events on a channel so every application instance drops its local copy at the same time.</p>

<h2>Beyond Strings</h2>
<p>Hashes store objects without serializing the whole document, sorted sets back leaderboards and rate limiters, and streams handle queues with consumer groups. Reaching for the right structure often removes application code.</p>

<h2>Conclusion</h2>
<p>Start with cache-aside and a TTL, add event-driven invalidation where staleness hurts, and lean on Redis data structures instead of reimplementing them.</p>
"#;
