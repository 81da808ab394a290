//! English/Arabic message catalogs for all user-facing CLI output.
//!
//! Missing keys fall back to English and then to the key itself, so a typo
//! never panics and untranslated strings stay visible.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Supported interface languages
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Language {
    /// English (default)
    #[default]
    En,
    /// Arabic
    Ar,
}

impl Language {
    /// Returns the canonical language label
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ar => "ar",
        }
    }

    /// Parse a language value, case-insensitive and tolerant of region tags
    /// such as `ar-EG`
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_lowercase();
        let lang = normalized.split(['-', '_']).next().unwrap_or("");
        match lang {
            "en" => Some(Self::En),
            "ar" => Some(Self::Ar),
            _ => None,
        }
    }
}

/// Look up a message for the given language.
pub fn t<'a>(lang: Language, key: &'a str) -> &'a str {
    if let Some(message) = catalog(lang).get(key).copied() {
        return message;
    }
    if let Some(message) = catalog(Language::En).get(key).copied() {
        return message;
    }
    key
}

fn catalog(lang: Language) -> &'static HashMap<&'static str, &'static str> {
    static EN: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    static AR: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();

    match lang {
        Language::En => EN.get_or_init(|| EN_MESSAGES.iter().copied().collect()),
        Language::Ar => AR.get_or_init(|| AR_MESSAGES.iter().copied().collect()),
    }
}

static EN_MESSAGES: &[(&str, &str)] = &[
    // Navigation
    ("nav.home", "AppReferenceHub"),
    ("nav.admin", "Admin"),
    ("nav.login", "Admin Login"),
    ("nav.logout", "Logout"),
    ("footer.copyright", "© 2024 AppReferenceHub. All rights reserved."),
    // Home listing
    ("home.title", "Application Reference Hub"),
    ("home.subtitle", "A curated collection of tech tools and applications"),
    ("app.view", "View Application"),
    // Login
    ("login.title", "Admin Login"),
    ("login.email", "Email"),
    ("login.password", "Password"),
    ("login.button", "Login"),
    ("login.error", "Invalid email or password"),
    ("login.success", "You have been logged in successfully."),
    ("logout.success", "You have been logged out."),
    ("session.none", "Not logged in."),
    ("auth.denied", "You must be logged in to perform this action."),
    // Admin dashboard
    ("admin.title", "Admin Dashboard"),
    ("admin.subtitle", "Manage your applications"),
    ("admin.add", "Add New Application"),
    ("admin.empty", "No applications found"),
    ("admin.edit", "Edit"),
    ("admin.delete", "Delete"),
    (
        "admin.delete.confirm",
        "Are you sure you want to delete this application?",
    ),
    ("admin.delete.cancel", "Cancel"),
    ("admin.delete.aborted", "Deletion cancelled."),
    // Application form and record labels
    ("app.form.add", "Add New Application"),
    ("app.form.edit", "Edit Application"),
    ("app.form.name", "Name"),
    ("app.form.description", "Description"),
    ("app.form.link", "Link"),
    ("app.form.image", "Image"),
    ("app.form.created", "Created"),
    ("app.form.save", "Save Application"),
    // Transient notifications
    ("app.notfound", "Application not found"),
    ("app.created", "The application has been created successfully."),
    ("app.updated", "The application has been updated successfully."),
    ("app.deleted", "The application has been deleted."),
];

static AR_MESSAGES: &[(&str, &str)] = &[
    // Navigation
    ("nav.home", "مركز تطبيقات المرجع"),
    ("nav.admin", "المسؤول"),
    ("nav.login", "تسجيل دخول المسؤول"),
    ("nav.logout", "تسجيل الخروج"),
    ("footer.copyright", "© 2024 مركز تطبيقات المرجع. جميع الحقوق محفوظة."),
    // Home listing
    ("home.title", "مركز مرجع التطبيقات"),
    ("home.subtitle", "مجموعة منتقاة من الأدوات والتطبيقات التقنية"),
    ("app.view", "عرض التطبيق"),
    // Login
    ("login.title", "تسجيل دخول المسؤول"),
    ("login.email", "البريد الإلكتروني"),
    ("login.password", "كلمة المرور"),
    ("login.button", "تسجيل الدخول"),
    ("login.error", "البريد الإلكتروني أو كلمة المرور غير صالحة"),
    ("login.success", "تم تسجيل الدخول بنجاح."),
    ("logout.success", "تم تسجيل الخروج."),
    ("session.none", "لم يتم تسجيل الدخول."),
    ("auth.denied", "يجب تسجيل الدخول لتنفيذ هذا الإجراء."),
    // Admin dashboard
    ("admin.title", "لوحة تحكم المسؤول"),
    ("admin.subtitle", "إدارة تطبيقاتك"),
    ("admin.add", "إضافة تطبيق جديد"),
    ("admin.empty", "لم يتم العثور على تطبيقات"),
    ("admin.edit", "تعديل"),
    ("admin.delete", "حذف"),
    (
        "admin.delete.confirm",
        "هل أنت متأكد أنك تريد حذف هذا التطبيق؟",
    ),
    ("admin.delete.cancel", "إلغاء"),
    ("admin.delete.aborted", "تم إلغاء الحذف."),
    // Application form and record labels
    ("app.form.add", "إضافة تطبيق جديد"),
    ("app.form.edit", "تعديل التطبيق"),
    ("app.form.name", "الاسم"),
    ("app.form.description", "الوصف"),
    ("app.form.link", "الرابط"),
    ("app.form.image", "الصورة"),
    ("app.form.created", "تاريخ الإنشاء"),
    ("app.form.save", "حفظ التطبيق"),
    // Transient notifications
    ("app.notfound", "لم يتم العثور على التطبيق"),
    ("app.created", "تم إنشاء التطبيق بنجاح."),
    ("app.updated", "تم تحديث التطبيق بنجاح."),
    ("app.deleted", "تم حذف التطبيق."),
];
