//! Vietnamese/English UI copy.

use serde::{Deserialize, Serialize};

use crate::model::{MessageStatus, ProductCategory};

/// UI language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Vietnamese.
    #[default]
    Vi,
    /// English.
    En,
}

impl Locale {
    /// BCP 47 tag used for `lang` attributes.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Vi => "vi",
            Self::En => "en",
        }
    }

    /// The other language.
    pub const fn toggled(self) -> Self {
        match self {
            Self::Vi => Self::En,
            Self::En => Self::Vi,
        }
    }

    /// Short label for the toggle button, naming the language it switches to.
    pub const fn toggle_label(self) -> &'static str {
        match self {
            Self::Vi => "EN",
            Self::En => "VI",
        }
    }
}

/// Keyed UI copy. Each variant renders in both locales via [`Phrase::text`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Phrase {
    // Navigation
    NavHome,
    NavAbout,
    NavContact,
    SwitchLanguage,
    // Home
    WelcomeTitle,
    WelcomeSubtitle,
    SearchPlaceholder,
    CategoryFeatured,
    CategoryNew,
    CategoryBestseller,
    Loading,
    NoProducts,
    ViewDetails,
    PerMeter,
    PreviousSlide,
    NextSlide,
    GoToSlide,
    // Product detail
    ProductNotFound,
    BackToHome,
    Size,
    Origin,
    PricePerMeter,
    Quantity,
    Decrease,
    Increase,
    Total,
    OrderViaZalo,
    ContactViaFacebook,
    ShowMoreImages,
    ShowFewerImages,
    NoImages,
    Discount,
    // Inquiry
    InquiryTitle,
    CustomerName,
    CustomerPhone,
    CustomerEmail,
    CustomerCity,
    MessageBody,
    ContactMethod,
    SendInquiry,
    InquirySent,
    InquiryFailed,
    // About / contact
    AboutTitle,
    AboutIntro,
    AboutQuality,
    AboutService,
    ContactTitle,
    ContactSubtitle,
    ContactTagline,
    Phone,
    Email,
    Address,
    // Admin shell
    AdminTitle,
    CheckingSession,
    Username,
    Password,
    SignIn,
    SigningIn,
    InvalidCredentials,
    SessionExpired,
    SignOut,
    Dashboard,
    Banners,
    Products,
    Fabrics,
    Messages,
    ContactInfo,
    // Admin lists and forms
    Create,
    Edit,
    Delete,
    Save,
    Saving,
    Cancel,
    Active,
    Inactive,
    NotFound,
    EmptyList,
    ConfirmDelete,
    CreateSucceeded,
    UpdateSucceeded,
    DeleteSucceeded,
    SaveFailed,
    DeleteFailed,
    Title,
    Description,
    DisplayOrder,
    Image,
    Images,
    Name,
    Slug,
    Price,
    DiscountPercent,
    Category,
    Material,
    Uses,
    PriceMin,
    PriceMax,
    StoreName,
    OwnerName,
    City,
    ZaloLink,
    FacebookLink,
    Avatar,
    Status,
    StatusAll,
    StatusNew,
    StatusContacted,
    StatusCompleted,
    ReceivedAt,
    // Upload
    UploadImages,
    Uploading,
    RemoveImage,
    UnsupportedFormat,
    FileTooLarge,
    TooManyFiles,
    UploadFailed,
    // Validation
    FieldRequired,
    ImageRequired,
    DiscountOutOfRange,
    OrderTooSmall,
    InvalidNumber,
    PriceRangeInverted,
    QuantityTooSmall,
    ContactChannelRequired,
    SlugTaken,
}

impl Phrase {
    fn pair(self) -> (&'static str, &'static str) {
        match self {
            Self::NavHome => ("Trang chủ", "Home"),
            Self::NavAbout => ("Giới thiệu", "About"),
            Self::NavContact => ("Liên hệ", "Contact"),
            Self::SwitchLanguage => ("Chuyển ngôn ngữ", "Switch language"),
            Self::WelcomeTitle => ("Chào mừng đến với Kho Vải Hân Hân", "Welcome to Kho Vải Hân Hân"),
            Self::WelcomeSubtitle => (
                "Vải cao cấp, đa dạng chủng loại và màu sắc",
                "Premium fabrics in every weave and colour",
            ),
            Self::SearchPlaceholder => ("Tìm kiếm sản phẩm...", "Search products..."),
            Self::CategoryFeatured => ("Nổi bật", "Featured"),
            Self::CategoryNew => ("Hàng mới", "New arrivals"),
            Self::CategoryBestseller => ("Bán chạy", "Best sellers"),
            Self::Loading => ("Đang tải...", "Loading..."),
            Self::NoProducts => ("Không tìm thấy sản phẩm nào", "No products found"),
            Self::ViewDetails => ("Xem chi tiết", "View details"),
            Self::PerMeter => ("/mét", "/meter"),
            Self::PreviousSlide => ("Ảnh trước", "Previous slide"),
            Self::NextSlide => ("Ảnh tiếp theo", "Next slide"),
            Self::GoToSlide => ("Chuyển đến ảnh", "Go to slide"),
            Self::ProductNotFound => ("Không tìm thấy sản phẩm", "Product not found"),
            Self::BackToHome => ("Quay lại trang chủ", "Back to home"),
            Self::Size => ("Kích thước", "Size"),
            Self::Origin => ("Xuất xứ", "Origin"),
            Self::PricePerMeter => ("Giá theo mét", "Price per meter"),
            Self::Quantity => ("Số lượng (mét)", "Quantity (meters)"),
            Self::Decrease => ("Giảm", "Decrease"),
            Self::Increase => ("Tăng", "Increase"),
            Self::Total => ("Tổng cộng", "Total"),
            Self::OrderViaZalo => ("Đặt hàng qua Zalo", "Order via Zalo"),
            Self::ContactViaFacebook => ("Liên hệ qua Facebook", "Contact on Facebook"),
            Self::ShowMoreImages => ("Xem thêm ảnh", "Show more images"),
            Self::ShowFewerImages => ("Thu gọn", "Show fewer"),
            Self::NoImages => ("Chưa có hình ảnh", "No images yet"),
            Self::Discount => ("Giảm giá", "Discount"),
            Self::InquiryTitle => ("Gửi yêu cầu đặt hàng", "Send an order request"),
            Self::CustomerName => ("Họ và tên", "Full name"),
            Self::CustomerPhone => ("Số điện thoại", "Phone number"),
            Self::CustomerEmail => ("Email", "Email"),
            Self::CustomerCity => ("Tỉnh/Thành phố", "City"),
            Self::MessageBody => ("Lời nhắn", "Message"),
            Self::ContactMethod => ("Liên hệ qua", "Contact me via"),
            Self::SendInquiry => ("Gửi yêu cầu", "Send request"),
            Self::InquirySent => (
                "Đã gửi yêu cầu! Chúng tôi sẽ liên hệ với bạn sớm.",
                "Request sent! We will get back to you soon.",
            ),
            Self::InquiryFailed => (
                "Không gửi được yêu cầu. Vui lòng thử lại.",
                "Could not send the request. Please try again.",
            ),
            Self::AboutTitle => ("Về Kho Vải Hân Hân", "About Kho Vải Hân Hân"),
            Self::AboutIntro => (
                "Kho Vải Hân Hân chuyên cung cấp vải lụa, satin, gấm, kate, linen và voan cho \
                 thợ may, nhà thiết kế và khách lẻ trên toàn quốc.",
                "Kho Vải Hân Hân supplies silk, satin, brocade, kate, linen and voile to \
                 tailors, designers and individual customers nationwide.",
            ),
            Self::AboutQuality => (
                "Mỗi cuộn vải đều được kiểm tra màu sắc và chất liệu trước khi giao.",
                "Every roll is checked for colour and material before it ships.",
            ),
            Self::AboutService => (
                "Cắt theo mét, tư vấn miễn phí và giao hàng tận nơi.",
                "Cut to the meter, free advice and delivery to your door.",
            ),
            Self::ContactTitle => ("Liên Hệ Với Chúng Tôi", "Get in Touch"),
            Self::ContactSubtitle => (
                "Chúng tôi sẵn sàng hỗ trợ bạn bất cứ lúc nào!",
                "We are ready to help whenever you need us!",
            ),
            Self::ContactTagline => (
                "Uy Tín - Chất Lượng - Phong Phú",
                "Trusted. Quality. Variety.",
            ),
            Self::Phone => ("Điện thoại", "Phone"),
            Self::Email => ("Email", "Email"),
            Self::Address => ("Địa chỉ", "Address"),
            Self::AdminTitle => ("Quản trị", "Admin"),
            Self::CheckingSession => ("Đang kiểm tra phiên đăng nhập...", "Checking session..."),
            Self::Username => ("Tên đăng nhập", "Username"),
            Self::Password => ("Mật khẩu", "Password"),
            Self::SignIn => ("Đăng nhập", "Sign in"),
            Self::SigningIn => ("Đang đăng nhập...", "Signing in..."),
            Self::InvalidCredentials => (
                "Sai tên đăng nhập hoặc mật khẩu",
                "Wrong username or password",
            ),
            Self::SessionExpired => (
                "Phiên đăng nhập đã hết hạn",
                "Your session has expired",
            ),
            Self::SignOut => ("Đăng xuất", "Sign out"),
            Self::Dashboard => ("Tổng quan", "Dashboard"),
            Self::Banners => ("Banner", "Banners"),
            Self::Products => ("Sản phẩm", "Products"),
            Self::Fabrics => ("Loại vải", "Fabrics"),
            Self::Messages => ("Tin nhắn", "Messages"),
            Self::ContactInfo => ("Thông tin liên hệ", "Contact info"),
            Self::Create => ("Thêm mới", "Create"),
            Self::Edit => ("Sửa", "Edit"),
            Self::Delete => ("Xóa", "Delete"),
            Self::Save => ("Lưu", "Save"),
            Self::Saving => ("Đang lưu...", "Saving..."),
            Self::Cancel => ("Hủy", "Cancel"),
            Self::Active => ("Đang hiển thị", "Active"),
            Self::Inactive => ("Đang ẩn", "Hidden"),
            Self::NotFound => ("Không tìm thấy", "Not found"),
            Self::EmptyList => ("Chưa có dữ liệu", "Nothing here yet"),
            Self::ConfirmDelete => (
                "Bạn có chắc chắn muốn xóa?",
                "Are you sure you want to delete this?",
            ),
            Self::CreateSucceeded => ("Tạo mới thành công!", "Created successfully!"),
            Self::UpdateSucceeded => ("Cập nhật thành công!", "Updated successfully!"),
            Self::DeleteSucceeded => ("Đã xóa!", "Deleted!"),
            Self::SaveFailed => (
                "Có lỗi xảy ra khi lưu. Vui lòng thử lại.",
                "Saving failed. Please try again.",
            ),
            Self::DeleteFailed => (
                "Có lỗi xảy ra khi xóa. Vui lòng thử lại.",
                "Deleting failed. Please try again.",
            ),
            Self::Title => ("Tiêu đề", "Title"),
            Self::Description => ("Mô tả", "Description"),
            Self::DisplayOrder => ("Thứ tự hiển thị", "Display order"),
            Self::Image => ("Hình ảnh", "Image"),
            Self::Images => ("Hình ảnh sản phẩm", "Product images"),
            Self::Name => ("Tên", "Name"),
            Self::Slug => ("Đường dẫn (slug)", "Slug"),
            Self::Price => ("Giá (VNĐ/mét)", "Price (VND/meter)"),
            Self::DiscountPercent => ("Giảm giá (%)", "Discount (%)"),
            Self::Category => ("Danh mục", "Category"),
            Self::Material => ("Chất liệu", "Material"),
            Self::Uses => ("Ứng dụng", "Uses"),
            Self::PriceMin => ("Giá thấp nhất", "Lowest price"),
            Self::PriceMax => ("Giá cao nhất", "Highest price"),
            Self::StoreName => ("Tên cửa hàng", "Store name"),
            Self::OwnerName => ("Chủ cửa hàng", "Owner"),
            Self::City => ("Thành phố", "City"),
            Self::ZaloLink => ("Link Zalo", "Zalo link"),
            Self::FacebookLink => ("Link Facebook", "Facebook link"),
            Self::Avatar => ("Ảnh đại diện", "Avatar"),
            Self::Status => ("Trạng thái", "Status"),
            Self::StatusAll => ("Tất cả", "All"),
            Self::StatusNew => ("Mới", "New"),
            Self::StatusContacted => ("Đã liên hệ", "Contacted"),
            Self::StatusCompleted => ("Hoàn thành", "Completed"),
            Self::ReceivedAt => ("Nhận lúc", "Received"),
            Self::UploadImages => ("Tải ảnh lên", "Upload images"),
            Self::Uploading => ("Đang tải ảnh...", "Uploading..."),
            Self::RemoveImage => ("Xóa ảnh", "Remove image"),
            Self::UnsupportedFormat => (
                "Định dạng không hỗ trợ (chỉ jpg, jpeg, png, webp)",
                "Unsupported format (jpg, jpeg, png, webp only)",
            ),
            Self::FileTooLarge => ("Ảnh vượt quá 5MB", "Image is larger than 5 MB"),
            Self::TooManyFiles => ("Vượt quá số ảnh cho phép", "Too many images"),
            Self::UploadFailed => ("Tải ảnh thất bại", "Upload failed"),
            Self::FieldRequired => ("Vui lòng nhập", "Please fill in"),
            Self::ImageRequired => (
                "Vui lòng tải lên ít nhất 1 ảnh",
                "Please upload at least one image",
            ),
            Self::DiscountOutOfRange => (
                "Giảm giá phải từ 0 đến 100%",
                "Discount must be between 0 and 100%",
            ),
            Self::OrderTooSmall => (
                "Thứ tự hiển thị phải từ 1 trở lên",
                "Display order must be 1 or more",
            ),
            Self::InvalidNumber => ("Giá trị không hợp lệ", "Invalid number"),
            Self::PriceRangeInverted => (
                "Giá thấp nhất không được lớn hơn giá cao nhất",
                "Lowest price must not exceed highest price",
            ),
            Self::QuantityTooSmall => ("Số lượng tối thiểu là 1", "Quantity must be at least 1"),
            Self::ContactChannelRequired => (
                "Vui lòng nhập số điện thoại hoặc email",
                "Please give a phone number or email",
            ),
            Self::SlugTaken => ("Đường dẫn đã được sử dụng", "Slug is already in use"),
        }
    }

    /// Copy for `locale`.
    pub fn text(self, locale: Locale) -> &'static str {
        let (vi, en) = self.pair();
        match locale {
            Locale::Vi => vi,
            Locale::En => en,
        }
    }
}

/// Tab and select label for a product category.
pub const fn category_phrase(category: ProductCategory) -> Phrase {
    match category {
        ProductCategory::Featured => Phrase::CategoryFeatured,
        ProductCategory::New => Phrase::CategoryNew,
        ProductCategory::Bestseller => Phrase::CategoryBestseller,
    }
}

/// Label for a customer message's follow-up state.
pub const fn status_phrase(status: MessageStatus) -> Phrase {
    match status {
        MessageStatus::New => Phrase::StatusNew,
        MessageStatus::Contacted => Phrase::StatusContacted,
        MessageStatus::Completed => Phrase::StatusCompleted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locale_toggles_and_serializes_lowercase() {
        assert_eq!(Locale::Vi.toggled(), Locale::En);
        assert_eq!(Locale::En.toggled(), Locale::Vi);
        assert_eq!(serde_json::to_string(&Locale::En).expect("encode"), "\"en\"");
        assert_eq!(
            serde_json::from_str::<Locale>("\"vi\"").expect("decode"),
            Locale::Vi
        );
    }

    #[test]
    fn phrases_render_per_locale() {
        assert_eq!(Phrase::CategoryBestseller.text(Locale::Vi), "Bán chạy");
        assert_eq!(Phrase::CategoryBestseller.text(Locale::En), "Best sellers");
        assert_eq!(Phrase::ShowMoreImages.text(Locale::Vi), "Xem thêm ảnh");
        assert_eq!(
            category_phrase(ProductCategory::New),
            Phrase::CategoryNew
        );
        assert_eq!(status_phrase(MessageStatus::Contacted), Phrase::StatusContacted);
    }
}
