//! 업로드된 프로필 사진

/// multipart 요청에서 읽어 들인 사진 파일
#[derive(Clone, Default, PartialEq, Eq)]
pub struct PictureUpload {
    /// 클라이언트가 보낸 원본 파일명
    pub file_name: Option<String>,
    /// 예: `image/png`
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl PictureUpload {
    pub fn new(file_name: Option<String>, content_type: Option<String>, bytes: Vec<u8>) -> Self {
        Self { file_name, content_type, bytes }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// `image/*` 콘텐츠 타입인지 여부
    pub fn is_image(&self) -> bool {
        self.content_type
            .as_deref()
            .is_some_and(|ct| ct.trim().to_ascii_lowercase().starts_with("image/"))
    }

    /// 저장 파일 확장자. 콘텐츠 타입에서 먼저 찾고, 없으면 원본 파일명에서 찾습니다.
    pub fn extension(&self) -> Option<String> {
        let from_type = self.content_type.as_deref().and_then(|ct| {
            let subtype = ct.split(';').next()?.trim().strip_prefix("image/")?;
            match subtype.to_ascii_lowercase().as_str() {
                "jpeg" | "jpg" | "pjpeg" => Some("jpg".to_string()),
                "svg+xml" => Some("svg".to_string()),
                other if !other.is_empty() && other.chars().all(|c| c.is_ascii_alphanumeric()) => {
                    Some(other.to_string())
                }
                _ => None,
            }
        });

        from_type.or_else(|| {
            let name = self.file_name.as_deref()?;
            let (_, ext) = name.rsplit_once('.')?;
            (!ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
                .then(|| ext.to_ascii_lowercase())
        })
    }
}

// 바이트 내용은 크기만 출력합니다.
impl std::fmt::Debug for PictureUpload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PictureUpload")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}
