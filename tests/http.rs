use once_cell::sync::Lazy;
use reqwest::Client;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

#[derive(Debug, Deserialize)]
struct DayResponse {
    key: String,
    tag: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TodayResponse {
    key: String,
    year: i32,
    month: u32,
    day: u32,
    tag: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MonthResponse {
    year: i32,
    month: u32,
    month_name: String,
    month_name_short: String,
    days: Vec<MonthDay>,
    weeks: Vec<WeekFlags>,
    stats: TagStats,
}

#[derive(Debug, Deserialize)]
struct MonthDay {
    key: String,
    day: u32,
    in_current_month: bool,
    tag: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WeekFlags {
    full: BTreeMap<String, bool>,
}

#[derive(Debug, Deserialize)]
struct TagStats {
    total: u64,
    categories: BTreeMap<String, CategoryStats>,
}

#[derive(Debug, Deserialize)]
struct CategoryStats {
    count: u64,
    percentage: u32,
    current_streak: u32,
    longest_streak: u32,
}

struct TestServer {
    base_url: String,
    child: Child,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

static TEST_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));
static SERVER: Lazy<Mutex<Option<Arc<TestServer>>>> = Lazy::new(|| Mutex::new(None));

#[cfg(unix)]
mod cleanup {
    use std::sync::atomic::{AtomicI32, Ordering};
    use std::sync::Once;

    static REGISTER: Once = Once::new();
    static PID: AtomicI32 = AtomicI32::new(0);

    pub fn register(pid: u32) {
        REGISTER.call_once(|| {
            PID.store(pid as i32, Ordering::SeqCst);
            unsafe {
                libc::atexit(on_exit);
            }
        });
    }

    extern "C" fn on_exit() {
        let pid = PID.load(Ordering::SeqCst);
        if pid > 0 {
            unsafe {
                libc::kill(pid, libc::SIGTERM);
            }
        }
    }
}

fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

fn unique_data_path() -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let mut path = std::env::temp_dir();
    path.push(format!(
        "emoji_calendar_http_{}_{}.json",
        std::process::id(),
        nanos
    ));
    path.to_string_lossy().to_string()
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/api/today")).send().await {
            if resp.status().is_success() {
                return;
            }
        }
        if Instant::now() > deadline {
            panic!("server did not become ready");
        }
        sleep(Duration::from_millis(100)).await;
    }
}

async fn spawn_server() -> TestServer {
    let port = pick_free_port();
    let data_path = unique_data_path();
    let child = Command::new(env!("CARGO_BIN_EXE_emoji_calendar"))
        .env("PORT", port.to_string())
        .env("APP_DATA_PATH", data_path)
        .env("RUST_LOG", "info")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("failed to spawn server");

    #[cfg(unix)]
    cleanup::register(child.id());

    let base_url = format!("http://127.0.0.1:{port}");
    wait_until_ready(&base_url).await;

    TestServer { base_url, child }
}

async fn shared_server() -> Arc<TestServer> {
    let mut guard = SERVER.lock().await;
    if let Some(server) = guard.as_ref() {
        return Arc::clone(server);
    }
    let server = Arc::new(spawn_server().await);
    *guard = Some(Arc::clone(&server));
    server
}

async fn fetch_month(client: &Client, base_url: &str, year: i32, month: i32) -> MonthResponse {
    client
        .get(format!("{base_url}/api/month?year={year}&month={month}"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

#[tokio::test]
async fn http_today_reports_the_clock() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let today: TodayResponse = client
        .get(format!("{}/api/today", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(
        today.key,
        format!("{:04}-{:02}-{:02}", today.year, today.month, today.day)
    );
    assert_eq!(today.tag, None);
}

#[tokio::test]
async fn http_set_and_clear_day() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let set: DayResponse = client
        .post(format!("{}/api/day", server.base_url))
        .json(&serde_json::json!({ "key": "1999-03-05", "tag": "🥦" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(set.key, "1999-03-05");
    assert_eq!(set.tag.as_deref(), Some("🥦"));

    let month = fetch_month(&client, &server.base_url, 1999, 3).await;
    let day = month.days.iter().find(|d| d.key == "1999-03-05").unwrap();
    assert!(day.in_current_month);
    assert_eq!(day.tag.as_deref(), Some("🥦"));

    // Unpadded but parsable keys come back in canonical form.
    let set: DayResponse = client
        .post(format!("{}/api/day", server.base_url))
        .json(&serde_json::json!({ "key": "1999-3-5", "tag": "🥘" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(set.key, "1999-03-05");
    assert_eq!(set.tag.as_deref(), Some("🥘"));

    let cleared: DayResponse = client
        .post(format!("{}/api/day", server.base_url))
        .json(&serde_json::json!({ "key": "1999-03-05", "tag": null }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(cleared.key, "1999-03-05");
    assert_eq!(cleared.tag, None);

    let month = fetch_month(&client, &server.base_url, 1999, 3).await;
    let day = month.days.iter().find(|d| d.key == "1999-03-05").unwrap();
    assert_eq!(day.tag, None);
}

#[tokio::test]
async fn http_month_grid_shape() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let month = fetch_month(&client, &server.base_url, 2024, 2).await;
    assert_eq!(month.year, 2024);
    assert_eq!(month.month, 2);
    assert_eq!(month.month_name, "February");
    assert_eq!(month.month_name_short, "Feb");
    assert_eq!(month.days.len(), 42);
    assert_eq!(month.weeks.len(), 6);

    let in_month = month.days.iter().filter(|d| d.in_current_month).count();
    assert_eq!(in_month, 29);

    // 2024-02-01 was a Thursday, so the row opens on the previous Sunday.
    assert_eq!(month.days[0].key, "2024-01-28");
    assert!(!month.days[0].in_current_month);
    assert_eq!(month.days[4].day, 1);
    assert!(month.days[4].in_current_month);
    assert_eq!(month.days[41].key, "2024-03-09");

    for week in &month.weeks {
        assert_eq!(week.full.len(), 2);
        assert!(week.full.contains_key("healthy"));
        assert!(week.full.contains_key("unhealthy"));
    }
}

#[tokio::test]
async fn http_month_stats_track_streaks() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    for (key, tag) in [
        ("1998-06-01", "🥦"),
        ("1998-06-02", "🥘"),
        ("1998-06-03", "🍔"),
    ] {
        let response = client
            .post(format!("{}/api/day", server.base_url))
            .json(&serde_json::json!({ "key": key, "tag": tag }))
            .send()
            .await
            .unwrap();
        assert!(response.status().is_success());
    }

    let month = fetch_month(&client, &server.base_url, 1998, 6).await;
    assert_eq!(month.stats.total, 3);

    let healthy = &month.stats.categories["healthy"];
    assert_eq!(healthy.count, 2);
    assert_eq!(healthy.percentage, 67);
    assert_eq!(healthy.current_streak, 0);
    assert_eq!(healthy.longest_streak, 2);

    let unhealthy = &month.stats.categories["unhealthy"];
    assert_eq!(unhealthy.count, 1);
    assert_eq!(unhealthy.percentage, 33);
    assert_eq!(unhealthy.current_streak, 1);
    assert_eq!(unhealthy.longest_streak, 1);

    // Three logged days never fill a seven-day row.
    assert!(month.weeks.iter().all(|week| !week.full["healthy"]));
}

#[tokio::test]
async fn http_month_rolls_out_of_range() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let month = fetch_month(&client, &server.base_url, 1999, 13).await;
    assert_eq!(month.year, 2000);
    assert_eq!(month.month, 1);
    assert_eq!(month.month_name, "January");

    let month = fetch_month(&client, &server.base_url, 1998, 0).await;
    assert_eq!(month.year, 1997);
    assert_eq!(month.month, 12);
    assert_eq!(month.month_name, "December");
}

#[tokio::test]
async fn http_rejects_bad_input() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    for body in [
        serde_json::json!({ "key": "2024-05-05", "tag": "🚀" }),
        serde_json::json!({ "key": "not-a-date", "tag": "🥦" }),
        serde_json::json!({ "key": "2024-13-05", "tag": "🥦" }),
        serde_json::json!({ "key": "2024-05-05", "tag": "  " }),
    ] {
        let response = client
            .post(format!("{}/api/day", server.base_url))
            .json(&body)
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 400, "body: {body}");
    }
}
