use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::modules::analytics::application::domain::entities::{BrandReport, CreatorReport};
use crate::modules::analytics::application::ports::incoming::use_cases::{
    BrandReportError, BrandReportUseCase, CreatorReportError, CreatorReportUseCase,
};
use crate::modules::auth::application::domain::entities::{
    Actor, ProfileCounts, PublicUser, UserId, UserProfile, UserRole, UserSummary,
};
use crate::modules::auth::application::ports::incoming::use_cases::{
    AuthOutput, GetUserProfileError, GetUserProfileUseCase, LoginUserError, LoginUserInput,
    LoginUserUseCase, ProfileLookup, RegisterUserError, RegisterUserInput, RegisterUserUseCase,
    UpdateProfileError, UpdateProfileUseCase,
};
use crate::modules::auth::application::ports::outgoing::{
    UpdateProfileData, UserQuery, UserQueryError, UserQueryResult,
};
use crate::modules::catalog::application::domain::entities::{
    Brand, BrandDetail, Campaign, CampaignDetail, Category, CategoryNode, Product, ProductDetail,
    ProductDraft,
};
use crate::modules::catalog::application::ports::incoming::use_cases::{
    CreateBrandError, CreateBrandInput, CreateBrandUseCase, CreateCampaignError,
    CreateCampaignInput, CreateCampaignUseCase, CreateCategoryError, CreateCategoryInput,
    CreateCategoryUseCase, CreateProductError, CreateProductInput, CreateProductUseCase,
    GetBrandError, GetBrandUseCase, GetCampaignError, GetCampaignUseCase, GetProductError,
    GetProductSummaryError, GetProductSummaryUseCase, GetProductUseCase, LinkCampaignProductError,
    LinkCampaignProductUseCase, LinkOutcome, ListCategoriesError, ListCategoriesUseCase,
    ProductSummary, ScrapeProductError, ScrapeProductUseCase,
};
use crate::modules::collection::application::domain::entities::{
    Collection, CollectionCard, CollectionDetail, FeedSort, ItemPlacement,
};
use crate::modules::collection::application::ports::incoming::use_cases::{
    AddCollectionItemError, AddCollectionItemInput, AddCollectionItemUseCase,
    CreateCollectionError, CreateCollectionInput, CreateCollectionUseCase, DeleteCollectionError,
    DeleteCollectionUseCase, GetCollectionError, GetCollectionUseCase, ListCollectionsError,
    ListFeedUseCase, ListUserCollectionsUseCase, RemoveCollectionItemError,
    RemoveCollectionItemUseCase, ReorderCollectionItemsError, ReorderCollectionItemsUseCase,
    UpdateCollectionError, UpdateCollectionInput, UpdateCollectionUseCase,
};
use crate::modules::engagement::application::domain::entities::{
    Comment, FollowDirection, FollowStatus, LikeStatus,
};
use crate::modules::engagement::application::ports::incoming::use_cases::{
    AddCommentError, AddCommentUseCase, ClickRequest, DeleteCommentError, DeleteCommentUseCase,
    FollowUserError, FollowUserUseCase, LikeCollectionError, LikeCollectionUseCase,
    ListCommentsError, ListCommentsUseCase, ListFollowsError, ListFollowsUseCase, RecordViewError,
    RecordViewUseCase, TrackClickError, TrackClickUseCase, UnfollowUserUseCase,
    UnlikeCollectionUseCase,
};
use crate::modules::media::application::ports::incoming::use_cases::{
    UploadImageError, UploadImageUseCase, UploadedImage,
};
use crate::modules::search::application::domain::entities::SearchResults;
use crate::modules::search::application::domain::query::SearchQuery;
use crate::modules::search::application::ports::incoming::use_cases::{SearchError, SearchUseCase};
use crate::shared::pagination::{PageRequest, PageResult};

const NOT_USED: &str = "not used in this test";

/// Placeholder for every use case a test does not exercise.
#[derive(Default, Clone)]
pub struct NotUsed;

// Auth

#[async_trait]
impl RegisterUserUseCase for NotUsed {
    async fn execute(&self, _input: RegisterUserInput) -> Result<AuthOutput, RegisterUserError> {
        unimplemented!("{NOT_USED}")
    }
}

#[async_trait]
impl LoginUserUseCase for NotUsed {
    async fn execute(&self, _input: LoginUserInput) -> Result<AuthOutput, LoginUserError> {
        unimplemented!("{NOT_USED}")
    }
}

#[async_trait]
impl GetUserProfileUseCase for NotUsed {
    async fn execute(&self, _lookup: ProfileLookup) -> Result<UserProfile, GetUserProfileError> {
        unimplemented!("{NOT_USED}")
    }
}

#[async_trait]
impl UpdateProfileUseCase for NotUsed {
    async fn execute(
        &self,
        _user_id: UserId,
        _data: UpdateProfileData,
    ) -> Result<PublicUser, UpdateProfileError> {
        unimplemented!("{NOT_USED}")
    }
}

// Catalog

#[async_trait]
impl CreateBrandUseCase for NotUsed {
    async fn execute(
        &self,
        _owner: UserId,
        _input: CreateBrandInput,
    ) -> Result<Brand, CreateBrandError> {
        unimplemented!("{NOT_USED}")
    }
}

#[async_trait]
impl GetBrandUseCase for NotUsed {
    async fn execute(&self, _brand_id: Uuid) -> Result<BrandDetail, GetBrandError> {
        unimplemented!("{NOT_USED}")
    }
}

#[async_trait]
impl CreateProductUseCase for NotUsed {
    async fn execute(
        &self,
        _created_by: UserId,
        _input: CreateProductInput,
    ) -> Result<Product, CreateProductError> {
        unimplemented!("{NOT_USED}")
    }
}

#[async_trait]
impl GetProductUseCase for NotUsed {
    async fn execute(&self, _product_id: Uuid) -> Result<ProductDetail, GetProductError> {
        unimplemented!("{NOT_USED}")
    }
}

#[async_trait]
impl ScrapeProductUseCase for NotUsed {
    async fn execute(&self, _url: &str) -> Result<ProductDraft, ScrapeProductError> {
        unimplemented!("{NOT_USED}")
    }
}

#[async_trait]
impl GetProductSummaryUseCase for NotUsed {
    async fn execute(&self, _product_id: Uuid) -> Result<ProductSummary, GetProductSummaryError> {
        unimplemented!("{NOT_USED}")
    }
}

#[async_trait]
impl ListCategoriesUseCase for NotUsed {
    async fn execute(&self) -> Result<Vec<CategoryNode>, ListCategoriesError> {
        unimplemented!("{NOT_USED}")
    }
}

#[async_trait]
impl CreateCategoryUseCase for NotUsed {
    async fn execute(&self, _input: CreateCategoryInput) -> Result<Category, CreateCategoryError> {
        unimplemented!("{NOT_USED}")
    }
}

#[async_trait]
impl CreateCampaignUseCase for NotUsed {
    async fn execute(
        &self,
        _actor: Actor,
        _input: CreateCampaignInput,
    ) -> Result<Campaign, CreateCampaignError> {
        unimplemented!("{NOT_USED}")
    }
}

#[async_trait]
impl GetCampaignUseCase for NotUsed {
    async fn execute(&self, _campaign_id: Uuid) -> Result<CampaignDetail, GetCampaignError> {
        unimplemented!("{NOT_USED}")
    }
}

#[async_trait]
impl LinkCampaignProductUseCase for NotUsed {
    async fn execute(
        &self,
        _actor: Actor,
        _campaign_id: Uuid,
        _product_id: Uuid,
    ) -> Result<LinkOutcome, LinkCampaignProductError> {
        unimplemented!("{NOT_USED}")
    }
}

// Collections

#[async_trait]
impl CreateCollectionUseCase for NotUsed {
    async fn execute(
        &self,
        _owner: UserId,
        _input: CreateCollectionInput,
    ) -> Result<Collection, CreateCollectionError> {
        unimplemented!("{NOT_USED}")
    }
}

#[async_trait]
impl GetCollectionUseCase for NotUsed {
    async fn execute(
        &self,
        _collection_id: Uuid,
        _viewer: Option<Actor>,
    ) -> Result<CollectionDetail, GetCollectionError> {
        unimplemented!("{NOT_USED}")
    }
}

#[async_trait]
impl ListFeedUseCase for NotUsed {
    async fn execute(
        &self,
        _sort: FeedSort,
        _page: PageRequest,
    ) -> Result<PageResult<CollectionCard>, ListCollectionsError> {
        unimplemented!("{NOT_USED}")
    }
}

#[async_trait]
impl ListUserCollectionsUseCase for NotUsed {
    async fn execute(
        &self,
        _owner: UserId,
        _viewer: Option<UserId>,
        _page: PageRequest,
    ) -> Result<PageResult<CollectionCard>, ListCollectionsError> {
        unimplemented!("{NOT_USED}")
    }
}

#[async_trait]
impl UpdateCollectionUseCase for NotUsed {
    async fn execute(
        &self,
        _actor: Actor,
        _collection_id: Uuid,
        _input: UpdateCollectionInput,
    ) -> Result<Collection, UpdateCollectionError> {
        unimplemented!("{NOT_USED}")
    }
}

#[async_trait]
impl DeleteCollectionUseCase for NotUsed {
    async fn execute(
        &self,
        _actor: Actor,
        _collection_id: Uuid,
    ) -> Result<(), DeleteCollectionError> {
        unimplemented!("{NOT_USED}")
    }
}

#[async_trait]
impl AddCollectionItemUseCase for NotUsed {
    async fn execute(
        &self,
        _actor: Actor,
        _collection_id: Uuid,
        _input: AddCollectionItemInput,
    ) -> Result<ItemPlacement, AddCollectionItemError> {
        unimplemented!("{NOT_USED}")
    }
}

#[async_trait]
impl RemoveCollectionItemUseCase for NotUsed {
    async fn execute(
        &self,
        _actor: Actor,
        _collection_id: Uuid,
        _product_id: Uuid,
    ) -> Result<(), RemoveCollectionItemError> {
        unimplemented!("{NOT_USED}")
    }
}

#[async_trait]
impl ReorderCollectionItemsUseCase for NotUsed {
    async fn execute(
        &self,
        _actor: Actor,
        _collection_id: Uuid,
        _product_ids: Vec<Uuid>,
    ) -> Result<Vec<ItemPlacement>, ReorderCollectionItemsError> {
        unimplemented!("{NOT_USED}")
    }
}

// Engagement

#[async_trait]
impl LikeCollectionUseCase for NotUsed {
    async fn execute(
        &self,
        _actor: Actor,
        _collection_id: Uuid,
    ) -> Result<LikeStatus, LikeCollectionError> {
        unimplemented!("{NOT_USED}")
    }
}

#[async_trait]
impl UnlikeCollectionUseCase for NotUsed {
    async fn execute(
        &self,
        _actor: Actor,
        _collection_id: Uuid,
    ) -> Result<LikeStatus, LikeCollectionError> {
        unimplemented!("{NOT_USED}")
    }
}

#[async_trait]
impl FollowUserUseCase for NotUsed {
    async fn execute(
        &self,
        _follower: UserId,
        _target: UserId,
    ) -> Result<FollowStatus, FollowUserError> {
        unimplemented!("{NOT_USED}")
    }
}

#[async_trait]
impl UnfollowUserUseCase for NotUsed {
    async fn execute(
        &self,
        _follower: UserId,
        _target: UserId,
    ) -> Result<FollowStatus, FollowUserError> {
        unimplemented!("{NOT_USED}")
    }
}

#[async_trait]
impl ListFollowsUseCase for NotUsed {
    async fn execute(
        &self,
        _user: UserId,
        _direction: FollowDirection,
        _page: PageRequest,
    ) -> Result<PageResult<UserSummary>, ListFollowsError> {
        unimplemented!("{NOT_USED}")
    }
}

#[async_trait]
impl ListCommentsUseCase for NotUsed {
    async fn execute(
        &self,
        _collection_id: Uuid,
        _viewer: Option<Actor>,
    ) -> Result<Vec<Comment>, ListCommentsError> {
        unimplemented!("{NOT_USED}")
    }
}

#[async_trait]
impl AddCommentUseCase for NotUsed {
    async fn execute(
        &self,
        _author: Actor,
        _collection_id: Uuid,
        _body: &str,
    ) -> Result<Comment, AddCommentError> {
        unimplemented!("{NOT_USED}")
    }
}

#[async_trait]
impl DeleteCommentUseCase for NotUsed {
    async fn execute(&self, _actor: Actor, _comment_id: Uuid) -> Result<(), DeleteCommentError> {
        unimplemented!("{NOT_USED}")
    }
}

#[async_trait]
impl RecordViewUseCase for NotUsed {
    async fn execute(
        &self,
        _collection_id: Uuid,
        _viewer: Option<Actor>,
    ) -> Result<(), RecordViewError> {
        unimplemented!("{NOT_USED}")
    }
}

#[async_trait]
impl TrackClickUseCase for NotUsed {
    async fn execute(&self, _request: ClickRequest) -> Result<String, TrackClickError> {
        unimplemented!("{NOT_USED}")
    }
}

// Search, analytics, media

#[async_trait]
impl SearchUseCase for NotUsed {
    async fn execute(&self, _query: SearchQuery) -> Result<SearchResults, SearchError> {
        unimplemented!("{NOT_USED}")
    }
}

#[async_trait]
impl BrandReportUseCase for NotUsed {
    async fn execute(&self, _actor: Actor, _brand_id: Uuid) -> Result<BrandReport, BrandReportError> {
        unimplemented!("{NOT_USED}")
    }
}

#[async_trait]
impl CreatorReportUseCase for NotUsed {
    async fn execute(&self, _creator: UserId) -> Result<CreatorReport, CreatorReportError> {
        unimplemented!("{NOT_USED}")
    }
}

#[async_trait]
impl UploadImageUseCase for NotUsed {
    async fn execute(
        &self,
        _uploader: UserId,
        _content_type: &str,
        _bytes: Vec<u8>,
    ) -> Result<UploadedImage, UploadImageError> {
        unimplemented!("{NOT_USED}")
    }
}

//
// Fixed answers
//

fn user_row(id: Uuid, username: &str) -> UserQueryResult {
    let now = Utc::now();
    UserQueryResult {
        id,
        email: format!("{username}@example.com"),
        username: username.to_string(),
        password_hash: "$argon2id$stub".to_string(),
        role: UserRole::Creator,
        display_name: Some(username.to_string()),
        bio: None,
        avatar_url: None,
        created_at: now,
        updated_at: now,
    }
}

/// Profile lookup that answers with one user (3 followers, 1 following,
/// 2 collections) or not at all.
#[derive(Clone)]
pub struct FixedProfile(Option<UserProfile>);

impl FixedProfile {
    pub fn found(id: Uuid, username: &str) -> Self {
        Self(Some(UserProfile {
            user: user_row(id, username).to_public(),
            counts: ProfileCounts {
                followers: 3,
                following: 1,
                collections: 2,
            },
        }))
    }

    pub fn missing() -> Self {
        Self(None)
    }
}

#[async_trait]
impl GetUserProfileUseCase for FixedProfile {
    async fn execute(&self, _lookup: ProfileLookup) -> Result<UserProfile, GetUserProfileError> {
        self.0.clone().ok_or(GetUserProfileError::NotFound)
    }
}

/// User directory with at most one entry, matched case-insensitively.
#[derive(Clone, Default)]
pub struct KnownUser(Option<UserQueryResult>);

impl KnownUser {
    pub fn named(id: Uuid, username: &str) -> Self {
        Self(Some(user_row(id, username)))
    }

    pub fn nobody() -> Self {
        Self(None)
    }
}

#[async_trait]
impl UserQuery for KnownUser {
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<UserQueryResult>, UserQueryError> {
        Ok(self.0.clone().filter(|u| u.id == user_id))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserQueryResult>, UserQueryError> {
        Ok(self.0.clone().filter(|u| u.email.eq_ignore_ascii_case(email)))
    }

    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserQueryResult>, UserQueryError> {
        Ok(self
            .0
            .clone()
            .filter(|u| u.username.eq_ignore_ascii_case(username)))
    }

    async fn profile_counts(&self, _user_id: Uuid) -> Result<ProfileCounts, UserQueryError> {
        Ok(ProfileCounts::default())
    }
}
