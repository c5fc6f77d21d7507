use crate::student::StudentField;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ar,
    En,
}

impl Locale {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ar" => Some(Self::Ar),
            "en" => Some(Self::En),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::Ar => "ar",
            Self::En => "en",
        }
    }

    pub fn dir(self) -> &'static str {
        match self {
            Self::Ar => "rtl",
            Self::En => "ltr",
        }
    }

    pub fn labels(self) -> &'static Labels {
        match self {
            Self::Ar => &AR,
            Self::En => &EN,
        }
    }
}

/// Fixed UI text for one locale.
pub struct Labels {
    pub list_title: &'static str,
    pub list_subtitle: &'static str,
    pub detail_title: &'static str,
    pub edit_title: &'static str,
    pub create_title: &'static str,
    pub add_student: &'static str,
    pub empty_title: &'static str,
    pub empty_hint: &'static str,
    pub col_id: &'static str,
    pub col_phone: &'static str,
    pub col_actions: &'static str,
    pub name: &'static str,
    pub email: &'static str,
    pub student_id: &'static str,
    pub phone: &'static str,
    pub address: &'static str,
    pub birth_date: &'static str,
    pub major: &'static str,
    pub registered_at: &'static str,
    pub view: &'static str,
    pub edit: &'static str,
    pub delete: &'static str,
    pub delete_confirm: &'static str,
    pub update: &'static str,
    pub save: &'static str,
    pub cancel: &'static str,
    pub back_to_list: &'static str,
    pub not_specified: &'static str,
}

impl Labels {
    pub fn field(&self, field: StudentField) -> &'static str {
        match field {
            StudentField::Name => self.name,
            StudentField::Email => self.email,
            StudentField::StudentId => self.student_id,
            StudentField::Phone => self.phone,
            StudentField::Address => self.address,
            StudentField::BirthDate => self.birth_date,
            StudentField::Major => self.major,
        }
    }
}

static AR: Labels = Labels {
    list_title: "نظام إدارة الطلاب",
    list_subtitle: "قائمة جميع الطلاب المسجلين",
    detail_title: "تفاصيل الطالب",
    edit_title: "تعديل بيانات الطالب",
    create_title: "إضافة طالب جديد",
    add_student: "إضافة طالب جديد",
    empty_title: "لا توجد طلاب مسجلين",
    empty_hint: "ابدأ بإضافة طالب جديد",
    col_id: "الرقم",
    col_phone: "الهاتف",
    col_actions: "الإجراءات",
    name: "الاسم",
    email: "البريد الإلكتروني",
    student_id: "رقم الطالب",
    phone: "رقم الهاتف",
    address: "العنوان",
    birth_date: "تاريخ الميلاد",
    major: "التخصص",
    registered_at: "تاريخ التسجيل",
    view: "عرض",
    edit: "تعديل",
    delete: "حذف",
    delete_confirm: "هل أنت متأكد من حذف هذا الطالب؟",
    update: "تحديث",
    save: "حفظ",
    cancel: "إلغاء",
    back_to_list: "العودة للقائمة",
    not_specified: "غير محدد",
};

static EN: Labels = Labels {
    list_title: "Student Management System",
    list_subtitle: "All registered students",
    detail_title: "Student Details",
    edit_title: "Edit Student",
    create_title: "Add New Student",
    add_student: "Add New Student",
    empty_title: "No students registered",
    empty_hint: "Start by adding a new student",
    col_id: "No.",
    col_phone: "Phone",
    col_actions: "Actions",
    name: "Name",
    email: "Email",
    student_id: "Student ID",
    phone: "Phone Number",
    address: "Address",
    birth_date: "Birth Date",
    major: "Major",
    registered_at: "Registered At",
    view: "View",
    edit: "Edit",
    delete: "Delete",
    delete_confirm: "Are you sure you want to delete this student?",
    update: "Update",
    save: "Save",
    cancel: "Cancel",
    back_to_list: "Back to List",
    not_specified: "Not specified",
};
