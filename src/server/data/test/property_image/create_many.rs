use super::*;

/// Tests recording several stored files for a property.
///
/// Expected: Ok with one image per file, in input order
#[tokio::test]
async fn records_every_file() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_property_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let property = factory::create_property(db).await?;
    let files = vec![
        StoredFile {
            folder: UploadFolder::Image,
            path: PathBuf::from("uploads/image/1-front.jpg"),
            content_type: "image/jpeg".to_string(),
        },
        StoredFile {
            folder: UploadFolder::Doc,
            path: PathBuf::from("uploads/doc/2-lease.pdf"),
            content_type: "application/pdf".to_string(),
        },
    ];

    let repo = PropertyImageRepository::new(db);
    let images = repo.create_many(property.id, &files).await?;

    assert_eq!(images.len(), 2);
    assert_eq!(images[0].folder, "image");
    assert_eq!(images[0].path, "uploads/image/1-front.jpg");
    assert_eq!(images[1].folder, "doc");
    assert_eq!(images[1].content_type, "application/pdf");
    assert!(images.iter().all(|image| image.property_id == property.id));
    assert_eq!(PropertyImage::find().count(db).await?, 2);

    Ok(())
}

/// Tests recording an empty file list.
///
/// Expected: Ok with no images
#[tokio::test]
async fn records_nothing_for_empty_input() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_property_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let property = factory::create_property(db).await?;

    let repo = PropertyImageRepository::new(db);
    let images = repo.create_many(property.id, &[]).await?;

    assert!(images.is_empty());
    assert_eq!(PropertyImage::find().count(db).await?, 0);

    Ok(())
}
