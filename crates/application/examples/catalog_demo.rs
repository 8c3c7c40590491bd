use application::VideoHostingApp;
use config::Config;
use domain::{ValidationService, Video};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🚀 Video hosting catalog demo");

    let config = Config::from_env(None)?;
    let app = VideoHostingApp::new_with_config(&config);

    let user = app
        .user_service
        .register_user("demo", "demo@example.com")
        .await?;
    println!("👤 Registered {} ({})", user.username, user.id);
    println!(
        "📁 Uploads would go to {}",
        app.user_service.get_upload_path(&user.id.to_string()).display()
    );

    let owner_id = user.id.to_string();
    for (title, raw_name, description) in [
        ("Rust in 10 minutes", "rust intro (final).mp4", "A quick tour of ownership"),
        ("Cooking pasta", "pasta night.webm", "Dinner for two"),
        ("Malware", "totally_safe.exe", ""),
    ] {
        let filename = ValidationService::sanitize_filename(raw_name);
        let video = Video::new(title, &filename, &owner_id)?.with_description(description);
        match app.video_service.add_video(video).await {
            Ok(video) => println!("🎬 Added \"{}\" as {}", video.title, video.filename),
            Err(e) => println!("❌ {}", e),
        }
    }

    let videos = app.video_service.list_videos(Some(&owner_id)).await?;
    if let Some(latest) = videos.first() {
        app.video_service.watch_video(latest.id).await?;
    }

    println!();
    println!("📊 Catalog for {}:", user.username);
    for video in app.video_service.list_videos(Some(&owner_id)).await? {
        println!("   • {} - {} views", video.title, video.views);
    }

    println!();
    println!("🔎 Search \"ownership\":");
    for video in app.video_service.search_videos("ownership").await? {
        println!("   • {}", video.title);
    }

    println!();
    println!("🏁 Demo complete!");
    Ok(())
}
