use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Utc;
use serde::{de::DeserializeOwned, Serialize};
use tokio::sync::Mutex;
use tracing::{debug, warn};
use uuid::Uuid;

use super::models::{
    deleted_job_title, ContactMessage, GalleryItem, GeneralApplication, GeneralApplicationStatus,
    Job, JobApplication, JobApplicationStatus, JobDeletion, JobFields, NewContactMessage,
    NewGalleryItem, NewGeneralApplication, NewJobApplication, NewNotice, Notice, Post, PostFields,
};
use super::store::{ContentStore, StoreError};

const POSTS: &str = "posts.json";
const JOBS: &str = "jobs.json";
const JOB_APPLICATIONS: &str = "job_applications.json";
const GENERAL_APPLICATIONS: &str = "general_applications.json";
const NOTICES: &str = "notices.json";
const GALLERY: &str = "gallery.json";
const MESSAGES: &str = "messages.json";

/// Content store keeping one JSON array per resource under a data directory.
///
/// Every read-modify-write runs under a single writer lock and files are
/// replaced through a temp file + rename, so concurrent requests cannot lose
/// each other's updates and readers never observe a half-written file.
pub struct FileStore {
    dir: PathBuf,
    write_lock: Mutex<()>,
}

impl FileStore {
    /// Open a store rooted at `dir`, creating the directory if needed
    pub async fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        tokio::fs::create_dir_all(&dir).await?;
        debug!("File store opened at {}", dir.display());
        Ok(Self {
            dir,
            write_lock: Mutex::new(()),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    async fn read<T: DeserializeOwned>(&self, file: &str) -> Result<Vec<T>, StoreError> {
        let path = self.dir.join(file);
        match tokio::fs::read(&path).await {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => Ok(Vec::new()),
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    async fn write<T: Serialize>(&self, file: &str, items: &[T]) -> Result<(), StoreError> {
        let path = self.dir.join(file);
        let tmp = self.dir.join(format!("{}.tmp", file));
        let bytes = serde_json::to_vec_pretty(items)?;
        tokio::fs::write(&tmp, bytes).await?;
        tokio::fs::rename(&tmp, &path).await?;
        Ok(())
    }

    /// Read a collection, apply `f` and persist the result under the writer lock
    async fn mutate<T, R, F>(&self, file: &str, f: F) -> Result<R, StoreError>
    where
        T: Serialize + DeserializeOwned + Send + Sync,
        R: Send,
        F: FnOnce(&mut Vec<T>) -> Result<R, StoreError> + Send,
    {
        let _guard = self.write_lock.lock().await;
        let mut items: Vec<T> = self.read(file).await?;
        let result = f(&mut items)?;
        self.write(file, &items).await?;
        Ok(result)
    }

    async fn remove<T, F>(&self, file: &str, matches: F) -> Result<bool, StoreError>
    where
        T: Serialize + DeserializeOwned + Send + Sync,
        F: Fn(&T) -> bool + Send,
    {
        self.mutate(file, move |items: &mut Vec<T>| {
            let before = items.len();
            items.retain(|item| !matches(item));
            Ok(items.len() != before)
        })
        .await
    }
}

/// Newest first; entries are stored newest first so ties keep that order
fn newest_first<T, K: Ord>(mut items: Vec<T>, created_at: impl Fn(&T) -> K) -> Vec<T> {
    items.sort_by(|a, b| created_at(b).cmp(&created_at(a)));
    items
}

fn ensure_unique_slug(posts: &[Post], slug: &str, except: Option<Uuid>) -> Result<(), StoreError> {
    if posts
        .iter()
        .any(|p| p.slug == slug && Some(p.id) != except)
    {
        return Err(StoreError::Conflict(format!("slug '{}' already exists", slug)));
    }
    Ok(())
}

#[async_trait]
impl ContentStore for FileStore {
    fn backend_tag(&self) -> &'static str {
        "file"
    }

    async fn ping(&self) -> Result<(), StoreError> {
        let metadata = tokio::fs::metadata(&self.dir).await?;
        if !metadata.is_dir() {
            return Err(StoreError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("{} is not a directory", self.dir.display()),
            )));
        }
        Ok(())
    }

    async fn close(&self) {
        // Wait out any in-flight write
        let _guard = self.write_lock.lock().await;
    }

    async fn list_posts(&self, limit: Option<i64>) -> Result<Vec<Post>, StoreError> {
        let mut posts = newest_first(self.read::<Post>(POSTS).await?, |p| p.created_at);
        if let Some(limit) = limit {
            posts.truncate(usize::try_from(limit.max(0)).unwrap_or(usize::MAX));
        }
        Ok(posts)
    }

    async fn get_post(&self, id: Uuid) -> Result<Option<Post>, StoreError> {
        let posts: Vec<Post> = self.read(POSTS).await?;
        Ok(posts.into_iter().find(|p| p.id == id))
    }

    async fn get_post_by_slug(&self, slug: &str) -> Result<Option<Post>, StoreError> {
        let posts: Vec<Post> = self.read(POSTS).await?;
        Ok(posts.into_iter().find(|p| p.slug == slug))
    }

    async fn create_post(&self, post: &PostFields) -> Result<Post, StoreError> {
        let post = post.clone();
        self.mutate(POSTS, move |posts: &mut Vec<Post>| {
            ensure_unique_slug(posts, &post.slug, None)?;
            let now = Utc::now();
            let created = Post {
                id: Uuid::new_v4(),
                title: post.title,
                summary: post.summary,
                content: post.content,
                image_url: post.image_url,
                category: post.category,
                author: post.author,
                slug: post.slug,
                created_at: now,
                updated_at: now,
            };
            posts.insert(0, created.clone());
            Ok(created)
        })
        .await
    }

    async fn update_post(&self, id: Uuid, post: &PostFields) -> Result<Option<Post>, StoreError> {
        let post = post.clone();
        self.mutate(POSTS, move |posts: &mut Vec<Post>| {
            ensure_unique_slug(posts, &post.slug, Some(id))?;
            let Some(existing) = posts.iter_mut().find(|p| p.id == id) else {
                return Ok(None);
            };
            existing.title = post.title;
            existing.summary = post.summary;
            existing.content = post.content;
            existing.image_url = post.image_url;
            existing.category = post.category;
            existing.author = post.author;
            existing.slug = post.slug;
            existing.updated_at = Utc::now();
            Ok(Some(existing.clone()))
        })
        .await
    }

    async fn delete_post(&self, id: Uuid) -> Result<bool, StoreError> {
        self.remove(POSTS, move |p: &Post| p.id == id).await
    }

    async fn list_jobs(&self) -> Result<Vec<Job>, StoreError> {
        Ok(newest_first(self.read::<Job>(JOBS).await?, |j| j.created_at))
    }

    async fn get_job(&self, id: Uuid) -> Result<Option<Job>, StoreError> {
        let jobs: Vec<Job> = self.read(JOBS).await?;
        Ok(jobs.into_iter().find(|j| j.id == id))
    }

    async fn create_job(&self, job: &JobFields) -> Result<Job, StoreError> {
        let job = job.clone();
        self.mutate(JOBS, move |jobs: &mut Vec<Job>| {
            let now = Utc::now();
            let created = Job {
                id: Uuid::new_v4(),
                title: job.title,
                department: job.department,
                location: job.location,
                job_type: job.job_type,
                salary: job.salary,
                description: job.description,
                requirements: job.requirements,
                created_at: now,
                updated_at: now,
            };
            jobs.insert(0, created.clone());
            Ok(created)
        })
        .await
    }

    async fn update_job(&self, id: Uuid, job: &JobFields) -> Result<Option<Job>, StoreError> {
        let job = job.clone();
        self.mutate(JOBS, move |jobs: &mut Vec<Job>| {
            let Some(existing) = jobs.iter_mut().find(|j| j.id == id) else {
                return Ok(None);
            };
            existing.title = job.title;
            existing.department = job.department;
            existing.location = job.location;
            existing.job_type = job.job_type;
            existing.salary = job.salary;
            existing.description = job.description;
            existing.requirements = job.requirements;
            existing.updated_at = Utc::now();
            Ok(Some(existing.clone()))
        })
        .await
    }

    async fn delete_job(&self, id: Uuid) -> Result<Option<JobDeletion>, StoreError> {
        let _guard = self.write_lock.lock().await;

        let mut jobs: Vec<Job> = self.read(JOBS).await?;
        let Some(position) = jobs.iter().position(|j| j.id == id) else {
            return Ok(None);
        };
        let job = jobs.remove(position);

        let mut applications: Vec<JobApplication> = self.read(JOB_APPLICATIONS).await?;
        let mut preserved = 0;
        for application in applications.iter_mut().filter(|a| a.job_id == Some(id)) {
            application.job_id = None;
            application.job_title = deleted_job_title(&job.title);
            preserved += 1;
        }

        // Applications first: a failure in between leaves the job in place
        // rather than an unmarked dangling reference
        if preserved > 0 {
            self.write(JOB_APPLICATIONS, &applications).await?;
        }
        if let Err(e) = self.write(JOBS, &jobs).await {
            warn!("Job {} applications detached but job file write failed", id);
            return Err(e);
        }

        Ok(Some(JobDeletion {
            job,
            preserved_applications: preserved,
        }))
    }

    async fn list_job_applications(&self) -> Result<Vec<JobApplication>, StoreError> {
        Ok(newest_first(
            self.read::<JobApplication>(JOB_APPLICATIONS).await?,
            |a| a.created_at,
        ))
    }

    async fn get_job_application(&self, id: Uuid) -> Result<Option<JobApplication>, StoreError> {
        let applications: Vec<JobApplication> = self.read(JOB_APPLICATIONS).await?;
        Ok(applications.into_iter().find(|a| a.id == id))
    }

    async fn create_job_application(
        &self,
        application: &NewJobApplication,
    ) -> Result<Option<JobApplication>, StoreError> {
        // Held across the job lookup so a concurrent delete_job cannot slip in
        let _guard = self.write_lock.lock().await;

        let jobs: Vec<Job> = self.read(JOBS).await?;
        let Some(job) = jobs.into_iter().find(|j| j.id == application.job_id) else {
            return Ok(None);
        };

        let application = application.clone();
        let created = JobApplication {
            id: Uuid::new_v4(),
            job_id: Some(job.id),
            job_title: job.title,
            first_name: application.first_name,
            last_name: application.last_name,
            email: application.email,
            phone: application.phone,
            cover_letter: application.cover_letter,
            experience: application.experience,
            linkedin_url: application.linkedin_url,
            portfolio_url: application.portfolio_url,
            cv_url: application.cv_url,
            status: JobApplicationStatus::Pending,
            created_at: Utc::now(),
        };

        let mut applications: Vec<JobApplication> = self.read(JOB_APPLICATIONS).await?;
        applications.insert(0, created.clone());
        self.write(JOB_APPLICATIONS, &applications).await?;
        Ok(Some(created))
    }

    async fn update_job_application_status(
        &self,
        id: Uuid,
        status: JobApplicationStatus,
    ) -> Result<Option<JobApplication>, StoreError> {
        self.mutate(JOB_APPLICATIONS, move |applications: &mut Vec<JobApplication>| {
            Ok(applications.iter_mut().find(|a| a.id == id).map(|a| {
                a.status = status;
                a.clone()
            }))
        })
        .await
    }

    async fn delete_job_application(&self, id: Uuid) -> Result<bool, StoreError> {
        self.remove(JOB_APPLICATIONS, move |a: &JobApplication| a.id == id)
            .await
    }

    async fn list_general_applications(&self) -> Result<Vec<GeneralApplication>, StoreError> {
        Ok(newest_first(
            self.read::<GeneralApplication>(GENERAL_APPLICATIONS).await?,
            |a| a.created_at,
        ))
    }

    async fn create_general_application(
        &self,
        application: &NewGeneralApplication,
    ) -> Result<GeneralApplication, StoreError> {
        let application = application.clone();
        self.mutate(
            GENERAL_APPLICATIONS,
            move |applications: &mut Vec<GeneralApplication>| {
                let created = GeneralApplication {
                    id: Uuid::new_v4(),
                    first_name: application.first_name,
                    last_name: application.last_name,
                    email: application.email,
                    phone: application.phone,
                    current_role: application.current_role,
                    experience: application.experience,
                    interested_roles: application.interested_roles,
                    availability_date: application.availability_date,
                    linkedin_url: application.linkedin_url,
                    portfolio_url: application.portfolio_url,
                    additional_info: application.additional_info,
                    cv_url: application.cv_url,
                    status: GeneralApplicationStatus::Pending,
                    created_at: Utc::now(),
                };
                applications.insert(0, created.clone());
                Ok(created)
            },
        )
        .await
    }

    async fn update_general_application_status(
        &self,
        id: Uuid,
        status: GeneralApplicationStatus,
    ) -> Result<Option<GeneralApplication>, StoreError> {
        self.mutate(
            GENERAL_APPLICATIONS,
            move |applications: &mut Vec<GeneralApplication>| {
                Ok(applications.iter_mut().find(|a| a.id == id).map(|a| {
                    a.status = status;
                    a.clone()
                }))
            },
        )
        .await
    }

    async fn delete_general_application(&self, id: Uuid) -> Result<bool, StoreError> {
        self.remove(GENERAL_APPLICATIONS, move |a: &GeneralApplication| a.id == id)
            .await
    }

    async fn list_notices(&self) -> Result<Vec<Notice>, StoreError> {
        Ok(newest_first(self.read::<Notice>(NOTICES).await?, |n| n.created_at))
    }

    async fn create_notice(&self, notice: &NewNotice) -> Result<Notice, StoreError> {
        let notice = notice.clone();
        self.mutate(NOTICES, move |notices: &mut Vec<Notice>| {
            let created = Notice {
                id: Uuid::new_v4(),
                title: notice.title,
                notice_type: notice.notice_type,
                url: notice.url,
                created_at: Utc::now(),
            };
            notices.insert(0, created.clone());
            Ok(created)
        })
        .await
    }

    async fn delete_notice(&self, id: Uuid) -> Result<bool, StoreError> {
        self.remove(NOTICES, move |n: &Notice| n.id == id).await
    }

    async fn list_gallery_items(&self) -> Result<Vec<GalleryItem>, StoreError> {
        Ok(newest_first(self.read::<GalleryItem>(GALLERY).await?, |g| g.created_at))
    }

    async fn create_gallery_item(&self, item: &NewGalleryItem) -> Result<GalleryItem, StoreError> {
        let item = item.clone();
        self.mutate(GALLERY, move |items: &mut Vec<GalleryItem>| {
            let created = GalleryItem {
                id: Uuid::new_v4(),
                url: item.url,
                alt_text: item.alt_text,
                caption: item.caption,
                file_type: item.file_type,
                file_size: item.file_size,
                duration: item.duration,
                created_at: Utc::now(),
            };
            items.insert(0, created.clone());
            Ok(created)
        })
        .await
    }

    async fn update_gallery_item(
        &self,
        id: Uuid,
        alt_text: &str,
        caption: &str,
    ) -> Result<Option<GalleryItem>, StoreError> {
        let alt_text = alt_text.to_string();
        let caption = caption.to_string();
        self.mutate(GALLERY, move |items: &mut Vec<GalleryItem>| {
            Ok(items.iter_mut().find(|g| g.id == id).map(|g| {
                g.alt_text = alt_text;
                g.caption = caption;
                g.clone()
            }))
        })
        .await
    }

    async fn delete_gallery_item(&self, id: Uuid) -> Result<bool, StoreError> {
        self.remove(GALLERY, move |g: &GalleryItem| g.id == id).await
    }

    async fn list_messages(&self) -> Result<Vec<ContactMessage>, StoreError> {
        Ok(newest_first(self.read::<ContactMessage>(MESSAGES).await?, |m| m.created_at))
    }

    async fn create_message(
        &self,
        message: &NewContactMessage,
    ) -> Result<ContactMessage, StoreError> {
        let message = message.clone();
        self.mutate(MESSAGES, move |messages: &mut Vec<ContactMessage>| {
            let created = ContactMessage {
                id: Uuid::new_v4(),
                name: message.name,
                email: message.email,
                subject: message.subject,
                message: message.message,
                read: false,
                created_at: Utc::now(),
            };
            messages.insert(0, created.clone());
            Ok(created)
        })
        .await
    }

    async fn set_message_read(
        &self,
        id: Uuid,
        read: bool,
    ) -> Result<Option<ContactMessage>, StoreError> {
        self.mutate(MESSAGES, move |messages: &mut Vec<ContactMessage>| {
            Ok(messages.iter_mut().find(|m| m.id == id).map(|m| {
                m.read = read;
                m.clone()
            }))
        })
        .await
    }

    async fn delete_message(&self, id: Uuid) -> Result<bool, StoreError> {
        self.remove(MESSAGES, move |m: &ContactMessage| m.id == id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn job_fields(title: &str) -> JobFields {
        JobFields {
            title: title.to_string(),
            department: "Engineering".into(),
            location: "Remote".into(),
            job_type: "Full-time".into(),
            salary: None,
            description: "Ship features".into(),
            requirements: vec!["Rust".into(), "SQL".into()],
        }
    }

    fn application_for(job: &Job) -> NewJobApplication {
        NewJobApplication {
            job_id: job.id,
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            phone: "555-0100".into(),
            cover_letter: "Hello".into(),
            experience: None,
            linkedin_url: None,
            portfolio_url: None,
            cv_url: "/uploads/cvs/ada.pdf".into(),
        }
    }

    fn post_fields(title: &str, slug: &str) -> PostFields {
        PostFields {
            title: title.into(),
            summary: "summary".into(),
            content: "<p>body</p>".into(),
            image_url: None,
            category: "News".into(),
            author: "Admin".into(),
            slug: slug.into(),
        }
    }

    #[tokio::test]
    async fn missing_files_read_as_empty() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::open(dir.path()).await.unwrap();

        assert!(store.list_posts(None).await.unwrap().is_empty());
        assert!(store.list_messages().await.unwrap().is_empty());
        store.ping().await.unwrap();
    }

    #[tokio::test]
    async fn deleting_job_detaches_and_marks_applications() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::open(dir.path()).await.unwrap();

        let job = store.create_job(&job_fields("Data Engineer")).await.unwrap();
        let other = store.create_job(&job_fields("Designer")).await.unwrap();
        let application = store
            .create_job_application(&application_for(&job))
            .await
            .unwrap()
            .unwrap();
        let untouched = store
            .create_job_application(&application_for(&other))
            .await
            .unwrap()
            .unwrap();

        let deletion = store.delete_job(job.id).await.unwrap().unwrap();
        assert_eq!(deletion.preserved_applications, 1);
        assert!(store.get_job(job.id).await.unwrap().is_none());

        let kept = store
            .get_job_application(application.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(kept.job_id, None);
        assert_eq!(kept.job_title, "Data Engineer (Job Deleted)");

        let other_app = store
            .get_job_application(untouched.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(other_app.job_id, Some(other.id));
        assert_eq!(other_app.job_title, "Designer");
    }

    #[tokio::test]
    async fn application_after_job_deletion_is_refused() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::open(dir.path()).await.unwrap();

        let job = store.create_job(&job_fields("Ops")).await.unwrap();
        let pending = application_for(&job);
        store.delete_job(job.id).await.unwrap().unwrap();

        assert!(store.create_job_application(&pending).await.unwrap().is_none());
        assert!(store.list_job_applications().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn applications_racing_job_deletion_never_dangle() {
        let dir = TempDir::new().unwrap();
        let store = std::sync::Arc::new(FileStore::open(dir.path()).await.unwrap());
        let job = store.create_job(&job_fields("Ops")).await.unwrap();

        let mut handles = Vec::new();
        for _ in 0..8 {
            let store = store.clone();
            let application = application_for(&job);
            handles.push(tokio::spawn(async move {
                store.create_job_application(&application).await.unwrap();
            }));
        }
        let deleter = {
            let store = store.clone();
            tokio::spawn(async move { store.delete_job(job.id).await.unwrap() })
        };
        for handle in handles {
            handle.await.unwrap();
        }
        deleter.await.unwrap().unwrap();

        for application in store.list_job_applications().await.unwrap() {
            assert_eq!(application.job_id, None);
            assert_eq!(application.job_title, "Ops (Job Deleted)");
        }
    }

    #[tokio::test]
    async fn deleting_unknown_job_returns_none() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::open(dir.path()).await.unwrap();

        assert!(store.delete_job(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn duplicate_slug_is_a_conflict() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::open(dir.path()).await.unwrap();

        store
            .create_post(&post_fields("Hello", "hello"))
            .await
            .unwrap();
        let err = store
            .create_post(&post_fields("Hello!", "hello"))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Conflict(_)));
        assert_eq!(store.list_posts(None).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn listings_are_newest_first_and_limited() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::open(dir.path()).await.unwrap();

        for n in 1..=3 {
            store
                .create_post(&post_fields(&format!("Post {}", n), &format!("post-{}", n)))
                .await
                .unwrap();
        }

        let slugs: Vec<String> = store
            .list_posts(None)
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.slug)
            .collect();
        assert_eq!(slugs, vec!["post-3", "post-2", "post-1"]);

        let latest = store.list_posts(Some(2)).await.unwrap();
        assert_eq!(latest.len(), 2);
        assert_eq!(latest[0].slug, "post-3");
    }

    #[tokio::test]
    async fn concurrent_creates_are_not_lost() {
        let dir = TempDir::new().unwrap();
        let store = std::sync::Arc::new(FileStore::open(dir.path()).await.unwrap());

        let mut handles = Vec::new();
        for n in 0..16 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store
                    .create_message(&NewContactMessage {
                        name: format!("Visitor {}", n),
                        email: "visitor@example.com".into(),
                        subject: "Hi".into(),
                        message: "Hello there".into(),
                    })
                    .await
                    .unwrap();
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(store.list_messages().await.unwrap().len(), 16);
    }
}
