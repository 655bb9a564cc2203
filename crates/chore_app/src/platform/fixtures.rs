//! Demonstration workspace used by the driver tests.

use std::fs;
use std::path::Path;

use super::config::AppConfig;

pub const SAMPLE_IMAGES: [&str; 3] = ["photo1.jpg", "image2.JPG", "picture3.jpeg"];

pub const SAMPLE_EMAIL_TEXT: &str = "
            Contact Information:
            John Doe - john.doe@example.com
            Jane Smith - jane.smith@company.org
            Support Team - support@mywebsite.com
            Admin - admin@test.net

            Other contacts:
            info@sample.com
            contact@business.co.uk
            hello@startup.io

            Some text without emails here.
            Another email: test@domain.com
            ";

/// Seeds sample images and an email text file under `root`, and returns a
/// config pointing every task at paths inside `root`.
pub fn seed_demo_workspace(root: &Path) -> AppConfig {
    let mut config = AppConfig::default();
    config.log_file = root.join("automation.log");
    config.images.source = root.join("sample_images");
    config.images.destination = root.join("output").join("moved_images");
    config.emails.input = root.join("sample_emails.txt");
    config.emails.output = root.join("output").join("extracted_emails.txt");
    config.scrape.output = root.join("output").join("scraped_title.txt");

    fs::create_dir_all(&config.images.source).expect("create sample_images");
    for name in SAMPLE_IMAGES {
        fs::write(config.images.source.join(name), "Sample image file").expect("write image");
    }
    fs::write(config.images.source.join("readme.txt"), "not an image").expect("write text");
    fs::write(&config.emails.input, SAMPLE_EMAIL_TEXT).expect("write sample emails");

    config
}
