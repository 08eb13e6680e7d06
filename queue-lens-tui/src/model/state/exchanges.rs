//! 交换机页面状态

use queue_lens_broker::Exchange;

/// 交换机页面状态（发布路径，仅列出）
#[derive(Debug, Default)]
pub struct ExchangesState {
    /// 当前 vhost
    pub vhost: Option<String>,
    /// 交换机列表
    pub exchanges: Vec<Exchange>,
    /// 当前选中的索引
    pub selected: usize,
    /// 是否正在加载
    pub loading: bool,
    /// 错误信息
    pub error: Option<String>,
    /// 取数序列号
    fetch_seq: u64,
}

impl ExchangesState {
    /// 创建新的交换机状态
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
        if !self.exchanges.is_empty() && self.selected < self.exchanges.len() - 1 {
            self.selected += 1;
        }
    }

    /// 切换 vhost：清空列表与选择
    pub fn set_vhost(&mut self, vhost: String) {
        self.vhost = Some(vhost);
        self.exchanges.clear();
        self.selected = 0;
        self.error = None;
    }

    /// 完全重置（vhost 切换时）
    pub fn reset(&mut self) {
        *self = Self::default();
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

    /// 设置交换机列表
    pub fn set_exchanges(&mut self, exchanges: Vec<Exchange>) {
        self.exchanges = exchanges;
        self.selected = 0;
        self.loading = false;
        self.error = None;
    }

    /// 取数失败，退化为空态
    pub fn fail(&mut self, error: String) {
        self.exchanges.clear();
        self.selected = 0;
        self.loading = false;
        self.error = Some(error);
    }
}
