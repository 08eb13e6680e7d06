//! 队列页面状态

use queue_lens_broker::Queue;

/// 队列页面状态
#[derive(Debug, Default)]
pub struct QueuesState {
    /// 当前选中的 vhost（队列只在 vhost 上下文中有意义）
    pub vhost: Option<String>,
    /// 队列列表
    pub queues: Vec<Queue>,
    /// 当前选中的索引
    pub selected: usize,
    /// 是否正在加载
    pub loading: bool,
    /// 错误信息
    pub error: Option<String>,
    /// 取数序列号
    fetch_seq: u64,
}

impl QueuesState {
    /// 创建新的队列状态
    pub fn new() -> Self {
        Self::default()
    }

    /// 选择上一项
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// 选择下一项
    pub fn select_next(&mut self) {
        if !self.queues.is_empty() && self.selected < self.queues.len() - 1 {
            self.selected += 1;
        }
    }

    /// 选择第一项
    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    /// 选择最后一项
    pub fn select_last(&mut self) {
        if !self.queues.is_empty() {
            self.selected = self.queues.len() - 1;
        }
    }

    /// 获取当前选中的队列
    pub fn selected_queue(&self) -> Option<&Queue> {
        self.queues.get(self.selected)
    }

    /// 切换 vhost：清空队列列表与选择
    pub fn set_vhost(&mut self, vhost: String) {
        self.vhost = Some(vhost);
        self.queues.clear();
        self.selected = 0;
        self.error = None;
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

    /// 设置队列列表
    pub fn set_queues(&mut self, queues: Vec<Queue>) {
        self.queues = queues;
        self.selected = 0;
        self.loading = false;
        self.error = None;
    }

    /// 取数失败，退化为空态
    pub fn fail(&mut self, error: String) {
        self.queues.clear();
        self.selected = 0;
        self.loading = false;
        self.error = Some(error);
    }
}
