//! Integration tests for post creation, lookup, editing, and deletion.

mod common;

use common::{make_post, register_user, TestHarness};
use scribe_core::common::DomainError;
use scribe_core::domains::posts::actions::{
    count_posts_by_author, create_post, delete_post, edit_post, find_post, posts_by_author,
};
use test_context::test_context;

#[test_context(TestHarness)]
#[tokio::test]
async fn created_post_is_immediately_readable_with_ownership_flag(ctx: &TestHarness) {
    let author = register_user("author", &ctx.deps).await;
    let other = register_user("reader", &ctx.deps).await;

    let post_id = make_post("First post", "Hello there", author, &ctx.deps).await;
    let id = post_id.to_string();

    let as_author = find_post(&id, Some(author), &ctx.deps).await.unwrap();
    assert!(as_author.is_viewer_owner);
    assert_eq!(as_author.title, "First post");
    assert_eq!(as_author.body, "Hello there");
    assert_eq!(as_author.author_id, author);
    assert!(as_author.author.avatar.starts_with("https://gravatar.com/avatar/"));

    let as_other = find_post(&id, Some(other), &ctx.deps).await.unwrap();
    assert!(!as_other.is_viewer_owner);

    let as_anonymous = find_post(&id, None, &ctx.deps).await.unwrap();
    assert!(!as_anonymous.is_viewer_owner);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn submitted_markup_never_reaches_storage(ctx: &TestHarness) {
    let author = register_user("author", &ctx.deps).await;

    let post_id = make_post(
        "<h1>Big</h1> announcement",
        r#"<p>body</p><script>steal()</script><img src=x onerror="pwn()">"#,
        author,
        &ctx.deps,
    )
    .await;

    let post = find_post(&post_id.to_string(), None, &ctx.deps).await.unwrap();
    assert_eq!(post.title, "Big announcement");
    assert_eq!(post.body, "body");
    assert!(!post.title.contains('<'));
    assert!(!post.body.contains('<'));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn empty_fields_are_collected_not_short_circuited(ctx: &TestHarness) {
    let author = register_user("author", &ctx.deps).await;

    let err = create_post("<p> </p>", "   ", author, &ctx.deps)
        .await
        .unwrap_err();
    assert_eq!(
        err.validation_messages().unwrap(),
        ["Title cannot be empty!", "Body cannot be empty!"]
    );
}

#[test_context(TestHarness)]
#[tokio::test]
async fn edit_keeps_created_at_and_author(ctx: &TestHarness) {
    let author = register_user("author", &ctx.deps).await;
    let post_id = make_post("Original", "Original body", author, &ctx.deps).await;
    let id = post_id.to_string();

    let before = find_post(&id, Some(author), &ctx.deps).await.unwrap();

    edit_post(&id, "Edited <b>title</b>", "Edited body", author, &ctx.deps)
        .await
        .unwrap();

    let after = find_post(&id, Some(author), &ctx.deps).await.unwrap();
    assert_eq!(after.title, "Edited title");
    assert_eq!(after.body, "Edited body");
    assert_eq!(after.created_at, before.created_at);
    assert_eq!(after.author_id, author);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn non_owner_cannot_edit_and_post_is_unchanged(ctx: &TestHarness) {
    let author = register_user("author", &ctx.deps).await;
    let intruder = register_user("intruder", &ctx.deps).await;
    let post_id = make_post("Mine", "My body", author, &ctx.deps).await;
    let id = post_id.to_string();

    let err = edit_post(&id, "Theirs", "Their body", intruder, &ctx.deps)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Forbidden));

    let post = find_post(&id, Some(author), &ctx.deps).await.unwrap();
    assert_eq!(post.title, "Mine");
    assert_eq!(post.body, "My body");
}

#[test_context(TestHarness)]
#[tokio::test]
async fn non_owner_cannot_delete(ctx: &TestHarness) {
    let author = register_user("author", &ctx.deps).await;
    let intruder = register_user("intruder", &ctx.deps).await;
    let post_id = make_post("Keep me", "Still here", author, &ctx.deps).await;
    let id = post_id.to_string();

    let err = delete_post(&id, intruder, &ctx.deps).await.unwrap_err();
    assert!(matches!(err, DomainError::Forbidden));

    assert!(find_post(&id, None, &ctx.deps).await.is_ok());
}

#[test_context(TestHarness)]
#[tokio::test]
async fn repeat_deletes_fail_the_same_way(ctx: &TestHarness) {
    let author = register_user("author", &ctx.deps).await;
    let post_id = make_post("Ephemeral", "Gone soon", author, &ctx.deps).await;
    let id = post_id.to_string();

    delete_post(&id, author, &ctx.deps).await.unwrap();

    let second = delete_post(&id, author, &ctx.deps).await.unwrap_err();
    let third = delete_post(&id, author, &ctx.deps).await.unwrap_err();
    assert!(matches!(second, DomainError::NotFound));
    assert!(matches!(third, DomainError::NotFound));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn malformed_ids_are_rejected_before_querying(ctx: &TestHarness) {
    let user = register_user("reader", &ctx.deps).await;

    let err = find_post("not-a-uuid", Some(user), &ctx.deps)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::InvalidId));

    let err = edit_post("12345", "t", "b", user, &ctx.deps).await.unwrap_err();
    assert!(matches!(err, DomainError::InvalidId));

    let err = delete_post("", user, &ctx.deps).await.unwrap_err();
    assert!(matches!(err, DomainError::InvalidId));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn author_timeline_is_newest_first(ctx: &TestHarness) {
    let author = register_user("writer", &ctx.deps).await;

    let first = make_post("One", "first body", author, &ctx.deps).await;
    tokio::time::sleep(std::time::Duration::from_millis(20)).await;
    let second = make_post("Two", "second body", author, &ctx.deps).await;
    tokio::time::sleep(std::time::Duration::from_millis(20)).await;
    let third = make_post("Three", "third body", author, &ctx.deps).await;

    let timeline = posts_by_author(author, None, &ctx.deps).await.unwrap();
    let ids: Vec<_> = timeline.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![third, second, first]);

    assert_eq!(count_posts_by_author(author, &ctx.deps).await.unwrap(), 3);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn timeline_of_silent_author_is_empty_not_an_error(ctx: &TestHarness) {
    let lurker = register_user("lurker", &ctx.deps).await;

    let timeline = posts_by_author(lurker, None, &ctx.deps).await.unwrap();
    assert!(timeline.is_empty());
}
