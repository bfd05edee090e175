use serde::Serialize;
use tracing::info;

use crate::api::post::slugify;
use crate::db::models::{JobFields, MediaKind, NewGalleryItem, PostFields};
use crate::db::{ContentStore, StoreError};

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct SeedOutcome {
    pub message: String,
    pub seeded: bool,
}

fn sample_post(title: &str, summary: &str, content: &str, category: &str, author: &str) -> PostFields {
    PostFields {
        title: title.to_string(),
        summary: summary.to_string(),
        content: content.to_string(),
        image_url: None,
        category: category.to_string(),
        author: author.to_string(),
        slug: slugify(title),
    }
}

fn sample_posts() -> Vec<PostFields> {
    vec![
        sample_post(
            "Welcome to ABC Company",
            "We are excited to announce the launch of our new website and services.",
            "<p>We are thrilled to welcome you to ABC Company. Our team has been working hard to bring you the best services and solutions.</p><p>Stay tuned for more updates and exciting announcements!</p>",
            "News",
            "Admin",
        ),
        sample_post(
            "New Product Launch",
            "Introducing our latest innovation that will revolutionize the industry.",
            "<p>Today marks a significant milestone for ABC Company as we launch our groundbreaking new product.</p><p>This innovation represents months of research and development, and we believe it will transform how businesses operate.</p>",
            "Updates",
            "Product Team",
        ),
        sample_post(
            "Company Expansion",
            "ABC Company is expanding to new markets and locations.",
            "<p>We are pleased to announce our expansion into three new markets this quarter.</p><p>This growth reflects our commitment to serving more customers and creating new opportunities.</p>",
            "Announcements",
            "CEO",
        ),
    ]
}

fn sample_gallery() -> Vec<NewGalleryItem> {
    [
        ("Modern office building", "Our state-of-the-art headquarters"),
        ("Team collaboration", "Innovation happens through teamwork"),
        ("Technology workspace", "Cutting-edge technology at work"),
    ]
    .into_iter()
    .map(|(alt, caption)| NewGalleryItem {
        url: "/placeholder.svg?height=400&width=600".to_string(),
        alt_text: alt.to_string(),
        caption: caption.to_string(),
        file_type: MediaKind::Image,
        file_size: None,
        duration: None,
    })
    .collect()
}

fn sample_jobs() -> Vec<JobFields> {
    vec![
        JobFields {
            title: "Senior Software Engineer".to_string(),
            department: "Engineering".to_string(),
            location: "San Francisco, CA".to_string(),
            job_type: "Full-time".to_string(),
            salary: Some("$120,000 - $160,000".to_string()),
            description: "We are looking for a Senior Software Engineer to join our growing engineering team. You will be responsible for designing, developing, and maintaining high-quality software solutions.".to_string(),
            requirements: vec![
                "5+ years of software development experience".to_string(),
                "Proficiency in JavaScript, Python, or Java".to_string(),
                "Experience with cloud platforms (AWS, GCP, Azure)".to_string(),
                "Strong problem-solving skills".to_string(),
                "Bachelor's degree in Computer Science or related field".to_string(),
            ],
        },
        JobFields {
            title: "Product Manager".to_string(),
            department: "Product".to_string(),
            location: "New York, NY".to_string(),
            job_type: "Full-time".to_string(),
            salary: Some("$100,000 - $140,000".to_string()),
            description: "Join our product team to help shape the future of our products. You will work closely with engineering, design, and business teams to deliver exceptional user experiences.".to_string(),
            requirements: vec![
                "3+ years of product management experience".to_string(),
                "Strong analytical and problem-solving skills".to_string(),
                "Experience with agile development methodologies".to_string(),
                "Excellent communication and leadership skills".to_string(),
                "MBA or relevant degree preferred".to_string(),
            ],
        },
    ]
}

/// Insert sample posts, gallery items and jobs into an empty site
///
/// Does nothing once any post exists.
pub async fn seed_sample_data(store: &dyn ContentStore) -> Result<SeedOutcome, StoreError> {
    if !store.list_posts(Some(1)).await?.is_empty() {
        info!("Seed skipped: posts already present");
        return Ok(SeedOutcome {
            message: "Data already seeded".to_string(),
            seeded: false,
        });
    }

    for post in sample_posts() {
        store.create_post(&post).await?;
    }
    for item in sample_gallery() {
        store.create_gallery_item(&item).await?;
    }
    for job in sample_jobs() {
        store.create_job(&job).await?;
    }

    info!("Sample data seeded into {} store", store.backend_tag());
    Ok(SeedOutcome {
        message: "Sample data seeded successfully".to_string(),
        seeded: true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::FileStore;
    use tempfile::TempDir;

    #[tokio::test]
    async fn seeds_once() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::open(dir.path()).await.unwrap();

        let first = seed_sample_data(&store).await.unwrap();
        assert!(first.seeded);
        assert_eq!(store.list_posts(None).await.unwrap().len(), 3);
        assert_eq!(store.list_jobs().await.unwrap().len(), 2);
        assert_eq!(store.list_gallery_items().await.unwrap().len(), 3);

        let second = seed_sample_data(&store).await.unwrap();
        assert!(!second.seeded);
        assert_eq!(second.message, "Data already seeded");
        assert_eq!(store.list_posts(None).await.unwrap().len(), 3);
    }

    #[test]
    fn sample_slugs_are_derived_from_titles() {
        let slugs: Vec<String> = sample_posts().into_iter().map(|p| p.slug).collect();
        assert_eq!(
            slugs,
            vec!["welcome-to-abc-company", "new-product-launch", "company-expansion"]
        );
    }
}
