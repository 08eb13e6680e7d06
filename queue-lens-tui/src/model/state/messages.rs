//! 队列详情页面状态（消息样本）

use queue_lens_broker::Message;
use queue_lens_core::ClassifiedBatch;

/// 消息桶
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BucketKind {
    /// JSON 消息
    #[default]
    Json,
    /// 普通字符串消息
    Strings,
    /// base64 消息
    Base64,
    /// 未识别编码的消息
    Unclassified,
}

impl BucketKind {
    /// 显示名称
    pub fn label(self) -> &'static str {
        match self {
            Self::Json => "JSON",
            Self::Strings => "Strings",
            Self::Base64 => "Base64",
            Self::Unclassified => "Unclassified",
        }
    }

    /// 下一个桶
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Json => Self::Strings,
            Self::Strings => Self::Base64,
            Self::Base64 => Self::Unclassified,
            Self::Unclassified => Self::Json,
        }
    }

    /// 上一个桶
    #[must_use]
    pub fn previous(self) -> Self {
        match self {
            Self::Json => Self::Unclassified,
            Self::Strings => Self::Json,
            Self::Base64 => Self::Strings,
            Self::Unclassified => Self::Base64,
        }
    }
}

/// 队列详情页面状态
#[derive(Debug, Default)]
pub struct MessagesState {
    /// 当前 vhost
    pub vhost: String,
    /// 当前队列
    pub queue: String,
    /// 抓取条数输入框内容
    pub count_input: String,
    /// 最近一次分类结果（每次抓取整体重算）
    pub batch: Option<ClassifiedBatch>,
    /// 当前查看的桶
    pub bucket: BucketKind,
    /// 桶内选中的索引
    pub selected: usize,
    /// 是否正在加载
    pub loading: bool,
    /// 错误信息
    pub error: Option<String>,
    /// 取数序列号
    fetch_seq: u64,
}

impl MessagesState {
    /// 创建新的详情状态（带默认抓取条数）
    pub fn new(default_count: i64) -> Self {
        Self {
            count_input: default_count.to_string(),
            ..Self::default()
        }
    }

    /// 切换目标队列：清空上一批结果
    pub fn set_target(&mut self, vhost: String, queue: String) {
        self.vhost = vhost;
        self.queue = queue;
        self.batch = None;
        self.bucket = BucketKind::Json;
        self.selected = 0;
        self.error = None;
    }

    /// 完全重置（vhost 切换时）
    pub fn reset(&mut self) {
        let count_input = self.count_input.clone();
        *self = Self {
            count_input,
            ..Self::default()
        };
    }

    /// 解析请求条数；非法输入返回 0（由调用方拒绝）
    pub fn requested_count(&self) -> i64 {
        self.count_input.trim().parse().unwrap_or(0)
    }

    /// 输入一位数字
    pub fn push_digit(&mut self, digit: char) {
        if digit.is_ascii_digit() && self.count_input.len() < 6 {
            self.count_input.push(digit);
        }
    }

    /// 删除一位数字
    pub fn pop_digit(&mut self) {
        self.count_input.pop();
    }

    /// 当前桶的条目数
    pub fn bucket_len(&self) -> usize {
        let Some(batch) = &self.batch else {
            return 0;
        };
        match self.bucket {
            BucketKind::Json => batch.json_messages.len(),
            BucketKind::Strings => batch.string_messages.len(),
            BucketKind::Base64 => batch.base64_messages.len(),
            BucketKind::Unclassified => batch.unclassified.len(),
        }
    }

    /// 切换到下一个桶
    pub fn next_bucket(&mut self) {
        self.bucket = self.bucket.next();
        self.selected = 0;
    }

    /// 切换到上一个桶
    pub fn prev_bucket(&mut self) {
        self.bucket = self.bucket.previous();
        self.selected = 0;
    }

    /// 选择上一项
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// 选择下一项
    pub fn select_next(&mut self) {
        let len = self.bucket_len();
        if len > 0 && self.selected < len - 1 {
            self.selected += 1;
        }
    }

    /// 选择第一项
    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    /// 选择最后一项
    pub fn select_last(&mut self) {
        let len = self.bucket_len();
        if len > 0 {
            self.selected = len - 1;
        }
    }

    /// 当前选中的 base64 消息（仅在 Base64 桶下有意义）
    pub fn selected_base64(&self) -> Option<&Message> {
        if self.bucket != BucketKind::Base64 {
            return None;
        }
        self.batch
            .as_ref()
            .and_then(|b| b.base64_messages.get(self.selected))
    }

    /// 发起一次新的取数，返回其序列号
    pub fn begin_fetch(&mut self) -> u64 {
        self.fetch_seq += 1;
        self.loading = true;
        self.fetch_seq
    }

    /// 判断完成事件是否属于最近一次发起的取数
    pub fn is_current(&self, seq: u64) -> bool {
        seq == self.fetch_seq
    }

    /// 设置分类结果（整体替换，不做增量更新）
    pub fn set_batch(&mut self, batch: ClassifiedBatch) {
        self.batch = Some(batch);
        self.selected = 0;
        self.loading = false;
        self.error = None;
    }

    /// 取数失败，退化为空态
    pub fn fail(&mut self, error: String) {
        self.batch = None;
        self.selected = 0;
        self.loading = false;
        self.error = Some(error);
    }
}
