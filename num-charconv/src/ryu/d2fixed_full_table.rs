// This file is generated by num-charconv-dev. Do not edit by hand.

pub(crate) const TABLE_SIZE: usize = 64;

pub(crate) static POW10_OFFSET: [u16; TABLE_SIZE] = [
    0, 2, 5, 8, 12, 16, 21, 26, 32, 39, 46, 54,
    62, 71, 80, 90, 100, 111, 122, 134, 146, 159, 173, 187,
    202, 217, 233, 249, 266, 283, 301, 319, 338, 357, 377, 397,
    418, 440, 462, 485, 508, 532, 556, 581, 606, 632, 658, 685,
    712, 740, 769, 798, 828, 858, 889, 920, 952, 984, 1017, 1050,
    1084, 1118, 1153, 1188,
];

pub(crate) static POW10_SPLIT: [[u64; 3]; 1224] = [
    [1, 72057594037927936, 0],
    [699646928636035157, 72057594, 0],
    [1, 0, 256],
    [11902091922964236229, 4722366482869, 0],
    [6760415703743915872, 4722, 0],
    [1, 0, 16777216],
    [13369850649504950658, 309485009821345068, 0],
    [15151142278969419334, 309485009, 0],
    [1, 0, 1099511627776],
    [4635408826454083567, 9437866644873197963, 1099],
    [12367138975830625353, 20282409603651, 0],
    [7555853734021184432, 20282, 0],
    [1, 0, 762037927936],
    [5171444645924616995, 699646928636035156, 72057594],
    [16672297533003297786, 1329227995784915872, 0],
    [14479142226848862515, 1329227995, 0],
    [1, 0, 2485645213696],
    [12214193123817091081, 11902091922964236228, 4722366482869],
    [16592893013671929435, 6760415703743915871, 4722],
    [4549827147718617003, 87112285931760, 0],
    [5274510003815168971, 87112, 0],
    [1, 0, 9516724781056],
    [9794971998307800535, 13369850649504950657, 24017821345068],
    [14720142899209240169, 15151142278969419333, 309485009],
    [4300745446091561535, 5708990770823839524, 0],
    [15197156861335443364, 5708990770, 0],
    [1, 0, 14731251286016],
    [13484604155038683037, 4635408826454083566, 21059670423947],
    [8356963862052375699, 12367138975830625352, 20282409603651],
    [5850852848337610021, 7555853734021184431, 20282],
    [2712780827214982050, 374144419156711, 0],
    [7732076577307618052, 374144, 0],
    [1, 0, 16468280344576],
    [17296309485351745867, 5171444645924616994, 11168903807060],
    [16598859101615853088, 16672297533003297785, 26843784915872],
    [7469952526870444257, 14479142226848862514, 1329227995],
    [13531654022114669524, 6073184580144670117, 1],
    [15757609704383306943, 24519928653, 0],
    [9590990814237149590, 24, 0],
    [1, 0, 18372662132736],
    [15408590707489433890, 12214193123817091080, 26463899502532],
    [18332056844289122710, 16592893013671929434, 18672246646623],
    [11114572877353986193, 4549827147718617002, 21576285931760],
    [1703393793997526525, 5274510003815168970, 87112],
    [5082852056285196265, 1606938044258990, 0],
    [816434266573722365, 1606938, 0],
    [1, 0, 10625530986496],
    [5736523019264798742, 9794971998307800534, 26181797980545],
    [10129314776268243339, 14720142899209240168, 16164233143877],
    [16511595775483995364, 4300745446091561534, 18738823839524],
    [12367293405401453325, 15197156861335443363, 5708990770],
    [16934621733248854291, 13078571300009428617, 5],
    [10278280417769171336, 105312291668, 0],
    [5760764486226151240, 105, 0],
    [1, 0, 2030731001856],
    [4128368337188369761, 13484604155038683036, 19528453031918],
    [10240941003671005056, 8356963862052375698, 15279317175368],
    [17933378316822368251, 5850852848337610020, 21223147060143],
    [8346249813075698616, 2712780827214982049, 13696419156711],
    [15906203609160902695, 7732076577307618051, 374144],
    [14525607416135386328, 6901746346790563, 0],
    [6397156777364256320, 6901746, 0],
    [1, 0, 15138937634816],
    [16798760952716600048, 17296309485351745866, 29689899825954],
    [2419982808370854967, 16598859101615853087, 20786404946937],
    [2922947087773078956, 7469952526870444256, 9637733552434],
    [15419220167069510190, 13531654022114669523, 27469854221733],
    [3452124642157173416, 15757609704383306942, 24519928653],
    [5979700067267186899, 9590990814237149589, 24],
    [4913998146922579597, 452312848583, 0],
    [5771037749337678924, 452, 0],
    [1, 0, 28680835301376],
    [3464734175350698519, 15408590707489433889, 26202993782792],
    [9334527711335850125, 18332056844289122709, 26538602522202],
    [7269882896518450106, 11114572877353986192, 15306092341162],
    [1372511258182263196, 1703393793997526524, 23214275541962],
    [7571228438575951046, 5082852056285196264, 1306044258990],
    [2992506536646070406, 816434266573722364, 1606938],
    [524517896824344606, 29642774844752946, 0],
    [15582941400898702773, 29642774, 0],
    [1, 0, 21974310977536],
    [3846112492507251066, 5736523019264798741, 32360549111254],
    [16681117750123089487, 10129314776268243338, 6718895095400],
    [14986314536556547267, 16511595775483995363, 6051670432318],
    [2573712825027107389, 12367293405401453324, 18057918027683],
    [7504855874008324928, 16934621733248854290, 2900557186697],
    [9572138030626879787, 10278280417769171335, 105312291668],
    [8520676959353394843, 5760764486226151239, 105],
    [13448984662897903496, 1942668892225, 0],
    [12338883700918130648, 1942, 0],
    [1, 0, 20380223799296],
    [2517285787892561600, 4128368337188369760, 3218555162524],
    [4338831817635138103, 10240941003671005055, 25892972170386],
    [1561495325934523196, 17933378316822368250, 11169452451108],
    [12262635050079398786, 8346249813075698615, 27395862277025],
    [11144065765517284188, 15906203609160902694, 3747787434755],
    [1212260522471875711, 14525607416135386327, 20466346790563],
    [9695352922247418869, 6397156777364256319, 6901746],
    [7227025834627242948, 127314748520905380, 0],
    [9609008238705447829, 127314748, 0],
    [1, 0, 14666910662656],
    [3609144142396852269, 16798760952716600047, 3615131187530],
    [11568848377382068865, 2419982808370854966, 30944158453279],
    [10068303578029323957, 2922947087773078955, 29651835877600],
    [11645070846862630231, 15419220167069510189, 23742187140051],
    [12449386705878485055, 3452124642157173415, 18837324160190],
    [15025619323517318418, 5979700067267186898, 22727266388373],
    [14996237555047131272, 4913998146922579596, 452312848583],
    [10211005638256058413, 5771037749337678923, 452],
    [1014743503555840530, 8343699359066, 0],
    [12900897707145290678, 8343, 0],
    [1, 0, 26913187823616],
    [4718003016239473662, 3464734175350698518, 8597506025761],
    [14865830648693666725, 9334527711335850124, 10384394101141],
    [14754517212823091778, 7269882896518450105, 22012074403984],
    [11113946551474911901, 1372511258182263195, 12264410437116],
    [1963520352638130630, 7571228438575951045, 21244162224104],
    [13342587341404964200, 2992506536646070405, 17458028434172],
    [6240392545013573291, 524517896824344605, 20502844752946],
    [14377490861349714758, 15582941400898702772, 29642774],
    [1717863312631397839, 546812681195752981, 0],
    [3611005143890591770, 546812681, 0],
    [1, 0, 12309208498176],
    [13168252824351245504, 3846112492507251065, 394904285205],
    [735883891883379688, 16681117750123089486, 25827812409738],
    [10609203866866106404, 14986314536556547266, 4876139521251],
    [12358191111890306470, 2573712825027107388, 26898406839052],
    [15229916368406413528, 7504855874008324927, 10631518906642],
    [7241424335568075942, 9572138030626879786, 1863461906823],
    [6049715868779871913, 8520676959353394842, 22593729070919],
    [2000548404719336762, 13448984662897903495, 1942668892225],
    [1410974761895205301, 12338883700918130647, 1942],
    [16000132467694084868, 35835915874844, 0],
    [16894908866816792556, 35835, 0],
    [1, 0, 13664136462336],
    [589096329272056762, 2517285787892561599, 26495235208544],
    [7097729792403256904, 4338831817635138102, 20474084648831],
    [8553736750439287020, 1561495325934523195, 9143664758778],
    [2114152625261065696, 12262635050079398785, 26662604121015],
    [9817523680007641224, 11144065765517284187, 1239065716774],
    [13047215537500048015, 1212260522471875710, 30271525586135],
    [16755544192002345880, 9695352922247418868, 15012391777855],
    [6930119832670648356, 7227025834627242947, 11068520905380],
    [14560698131901886167, 9609008238705447828, 127314748],
    [16408020927503338035, 2348542582773833227, 0],
    [14274703510609809116, 2348542582, 0],
    [1, 0, 8943195652096],
    [16428432973129962470, 3609144142396852268, 15414627148527],
    [3721112279790863774, 11568848377382068864, 5547545803830],
    [18032764903259620753, 10068303578029323956, 10797631280555],
    [18058455550468776079, 11645070846862630230, 6823674882605],
    [15692090139033993190, 12449386705878485054, 4306814540455],
    [389416944300619393, 15025619323517318417, 1676812947666],
    [12009691357260487293, 14996237555047131271, 25675553539724],
    [13494259174449809900, 10211005638256058412, 1370055009355],
    [18288583400616279877, 1014743503555840529, 8343699359066],
    [7216107869057472, 12900897707145290677, 8343],
    [17237061291959073878, 153914086704665, 0],
    [1599418782488783273, 153914, 0],
    [1, 0, 12822255763456],
    [9565464987240335777, 4718003016239473661, 8332805878294],
    [857713933775880687, 14865830648693666724, 3001799843980],
    [4621617820081363356, 14754517212823091777, 8603602488249],
    [9630162611715632528, 11113946551474911900, 11461106442651],
    [9283986497984645815, 1963520352638130629, 20613723303109],
    [8981807745082630996, 13342587341404964199, 20509338292357],
    [18350140531565934622, 6240392545013573290, 3508779405341],
    [4411619033127524143, 14377490861349714757, 3605093125556],
    [1852297584111266889, 1717863312631397838, 13065195752981],
    [11746243463811666096, 3611005143890591769, 546812681],
    [6335244004343789147, 10086913586276986678, 0],
    [5109502367228239844, 10086913586, 0],
    [1603272682579847821, 10, 0],
    [1, 0, 16761713852416],
    [6609546910952910052, 13168252824351245503, 20046039892345],
    [3911171343112928288, 735883891883379687, 19650575126094],
    [5254510615100863555, 10609203866866106403, 6716669938882],
    [3881927570803887650, 12358191111890306469, 6975825615420],
    [6379348759607163190, 15229916368406413527, 14634392558399],
    [14595733737222406466, 7241424335568075941, 22170327955754],
    [14670223432002373542, 6049715868779871912, 18311108449946],
    [4045087795619708513, 2000548404719336761, 6103076489095],
    [12598467307137142718, 1410974761895205300, 12828867368919],
    [734704388050777108, 16000132467694084867, 3067915874844],
    [5682201693687285822, 16894908866816792555, 35835],
    [11048712694145438788, 661055968790248, 0],
    [17871025777010319485, 661055, 0],
    [1, 0, 14015031934976],
    [15268761435931663695, 589096329272056761, 2614384768703],
    [5016238054648555438, 7097729792403256903, 4923463698998],
    [14236047313993899750, 8553736750439287019, 11137114608443],
    [6957759675154690848, 2114152625261065695, 21339532209025],
    [18439367135478514473, 9817523680007641223, 25726707290971],
    [8539004472540641041, 13047215537500048014, 21492908319870],
    [1908462039431738399, 16755544192002345879, 7107375682548],
    [714690453250792146, 6930119832670648355, 5012789337027],
    [13782189447673929633, 14560698131901886166, 24075889480596],
    [3584742913798803164, 16408020927503338034, 27254773833227],
    [4347581515245125291, 14274703510609809115, 2348542582],
    [16836742268156371392, 6429475823218628948, 2],
    [11764082328865615308, 43322963970, 0],
    [5957633711383291746, 43, 0],
    [1, 0, 2092890587136],
    [9917186842884466953, 16428432973129962469, 25216201721900],
    [4751011869809829335, 3721112279790863773, 30388977558144],
    [11068497969931435029, 18032764903259620752, 7510978950836],
    [17118056985122509954, 18058455550468776078, 2110850669910],
    [14607066080907684459, 15692090139033993189, 13585021110334],
    [11768892370493391107, 389416944300619392, 26759651046673],
    [4043396447647747170, 12009691357260487292, 24620731525255],
    [1670341095362518057, 13494259174449809899, 18961991426092],
    [3190817644167043165, 18288583400616279876, 25525000391185],
    [10425820027224322486, 7216107869057471, 17945934422965],
    [13139964660506311565, 17237061291959073877, 22842086704665],
    [2297772885416059937, 1599418782488783272, 153914],
    [7677687919964523763, 2839213766779714, 0],
    [14144589152747892828, 2839213, 0],
    [1, 0, 25597518544896],
    [17069730341503660290, 9565464987240335776, 13220046496765],
    [18167423787163077107, 857713933775880686, 31297250538404],
    [3765746945827805904, 4621617820081363355, 31388522052161],
    [10241734342430761691, 9630162611715632527, 22981503285916],
    [13345717282537140784, 9283986497984645814, 1383486904773],
    [9313926784816939953, 8981807745082630995, 9898994763111],
    [550974205049535019, 18350140531565934621, 15173239154346],
    [4494692285504086222, 4411619033127524142, 32206100413253],
    [1134308559863725587, 1852297584111266888, 25636765134],
    [17587558045116130233, 11746243463811666095, 28470343434265],
    [9817142032346161594, 6335244004343789146, 5682276986678],
    [6071944935834172568, 5109502367228239843, 10086913586],
    [11564168293299416955, 1603272682579847820, 10],
    [12458266507226064437, 186070713419, 0],
    [1304432355328256915, 186, 0],
    [1, 0, 1215358304256],
    [15946798815542087355, 6609546910952910051, 3047212025023],
    [12082566083831286138, 3911171343112928287, 16419284847591],
    [11449623684706196411, 5254510615100863554, 1445210439715],
    [17518743620362604446, 3881927570803887649, 215345825189],
    [9451061563087633805, 6379348759607163189, 31909791236311],
    [13191114787623314926, 14595733737222406465, 32424795274405],
    [8367349876734474799, 14670223432002373541, 15673219284648],
    [6544253801674393507, 4045087795619708512, 6580682964281],
    [16113906253336597498, 12598467307137142717, 8963039828404],
    [10294087136797312392, 734704388050777107, 22507308032771],
    [9127173070014462803, 5682201693687285821, 18152598951915],
    [16266900839595484952, 11048712694145438787, 5695968790248],
    [3299745387370952632, 17871025777010319484, 661055],
    [12061115182604399189, 12194330274671844, 0],
    [5066801222582989646, 12194330, 0],
    [1, 0, 23481827721216],
    [7568423425299591513, 15268761435931663694, 13895271930809],
    [16561505984665207377, 5016238054648555437, 18667771737671],
    [4329114621856906245, 14236047313993899749, 13791377180907],
    [1477500474861899139, 6957759675154690847, 22663999600095],
    [16891579639263969684, 18439367135478514472, 19086462900359],
    [4684451357140027420, 8539004472540641040, 19351103457934],
    [14727186580409080709, 1908462039431738398, 14371038743447],
    [15864176859687308834, 714690453250792145, 11990747133987],
    [1755486942842684438, 13782189447673929632, 2610194329302],
    [17417077516652710041, 3584742913798803163, 20187235682866],
    [4290982361913532783, 4347581515245125290, 6484912721627],
    [11826659981004351409, 16836742268156371391, 30722637732180],
    [932930645678090820, 11764082328865615307, 43322963970],
    [12707792781328052617, 5957633711383291745, 43],
    [16491596426880311906, 799167628880, 0],
    [3092207065214166010, 799, 0],
    [1, 0, 21477537611776],
    [8142946531605512550, 9917186842884466952, 17821257552869],
    [5328402096432654515, 4751011869809829334, 17808600024477],
    [1932004361303814512, 11068497969931435028, 24718927971728],
    [2511477647985517771, 17118056985122509953, 32741791850638],
    [17451375493324716694, 14607066080907684458, 30336637992933],
    [9489266854478998489, 11768892370493391106, 6780219192960],
    [8803053132063235169, 4043396447647747169, 2539090549372],
    [16198682197142616773, 1670341095362518056, 16196172974571],
    [13696242485403414202, 3190817644167043164, 12735565184836],
    [16409082426079859931, 10425820027224322485, 15445712318911],
    [11653410736879597610, 13139964660506311564, 27048124562517],
    [13589514120653213261, 2297772885416059936, 9026416208296],
    [8032934885905905774, 7677687919964523762, 21165766779714],
    [2753021350129449273, 14144589152747892827, 2839213],
    [16974897459201404133, 52374249726338269, 0],
    [13398576176159101589, 52374249, 0],
    [1, 0, 2464925351936],
    [10284586955251725351, 17069730341503660289, 16878984858016],
    [5294476488634150891, 18167423787163077106, 6555204141550],
    [15833244538135063323, 3765746945827805903, 28047555205531],
    [10348512742273116664, 10241734342430761690, 19126723472783],
    [13658504610142595663, 13345717282537140783, 9043504908982],
    [11956362239240850266, 9313926784816939952, 14365029868371],
    [13415901703662731781, 550974205049535018, 5934243657757],
    [5161774027546852762, 4494692285504086221, 11336061490990],
    [15274384838790587711, 1134308559863725586, 4271953423432],
    [14233354597679374929, 17587558045116130232, 13914532188335],
    [4274656492162486921, 9817142032346161593, 8163329160794],
    [12040276505541795046, 6071944935834172567, 27276626894819],
    [13238307206256765457, 11564168293299416954, 17483675363980],
    [12850161204172713271, 12458266507226064436, 186070713419],
    [17531777095001445154, 1304432355328256914, 186],
    [5623628114515245990, 3432398830065, 0],
    [7357116143579573377, 3432, 0],
    [1, 0, 27875864477696],
    [3555734177475596582, 15946798815542087354, 31775654997219],
    [14001876724756424382, 12082566083831286137, 13378620685343],
    [18159905057231476140, 11449623684706196410, 3617949692994],
    [5585207679308509467, 17518743620362604445, 14645512343073],
    [13948697622866724672, 9451061563087633804, 321715091765],
    [9807691927739036432, 13191114787623314925, 1957453594945],
    [15818010096140820918, 8367349876734474798, 15968354764709],
    [5629845624785010943, 6544253801674393506, 4029873536608],
    [9517635131137734707, 16113906253336597497, 29715558043581],
    [619338244618780585, 10294087136797312391, 2109494785043],
    [11632367007491958899, 9127173070014462802, 21571881830461],
    [12083314261009739916, 16266900839595484951, 8316178879555],
    [16880538609458881650, 3299745387370952631, 11492653834364],
    [17404223674486504228, 12061115182604399188, 4634274671844],
    [7089067015287185433, 5066801222582989645, 12194330],
    [2592264228029443648, 224945689727159819, 0],
    [13413731084370224440, 224945689, 0],
    [1, 0, 23886410285056],
    [9323915941641553425, 7568423425299591512, 10157897801038],
    [12155831029092699564, 16561505984665207376, 7909234681773],
    [17397171276588232676, 4329114621856906244, 29471080095461],
    [11874560617553253769, 1477500474861899138, 808915694367],
    [13444839516837727954, 16891579639263969683, 14096253944616],
    [16994416043584590671, 4684451357140027419, 29726798362384],
    [15879694502877015730, 14727186580409080708, 23249859998750],
    [4234647645735263359, 15864176859687308833, 24480095165137],
    [7978589901512919496, 1755486942842684437, 3803944181664],
    [6114237175390859894, 17417077516652710040, 32426232614619],
    [8658612872088282708, 4290982361913532782, 25023641124522],
    [10253813330683324853, 11826659981004351408, 11723050574271],
    [13289465061747830991, 932930645678090819, 10081688890827],
    [4123165538545565412, 12707792781328052616, 18000894011233],
    [7846417485927038481, 16491596426880311905, 799167628880],
    [10562273346358018864, 3092207065214166009, 799],
    [2691512658346619120, 14742040721959, 0],
    [751187558544605998, 14742, 0],
    [1, 0, 26888441430016],
    [3757709791947931308, 8142946531605512549, 26070288853256],
    [3452755398462519465, 5328402096432654514, 15380104734166],
    [3105818720159874523, 1932004361303814511, 5249136147476],
    [16859138458894499364, 2511477647985517770, 27242946040961],
    [12271894740606233755, 17451375493324716693, 16642514414186],
    [5429638071845793701, 9489266854478998488, 19553477214466],
    [145278150038876889, 8803053132063235168, 23592878132321],
    [9050266019724932450, 16198682197142616772, 6236742474792],
    [11907016253451490866, 13696242485403414201, 29109889538140],
    [2472757296513770735, 16409082426079859930, 15244631732661],
    [10558733798178239360, 11653410736879597609, 9248736689036],
    [15917322570831255850, 13589514120653213260, 3314435466272],
    [12254334656791355238, 8032934885905905773, 12379149241586],
    [7869542424662730262, 2753021350129449272, 25821920211035],
    [1378558986933000253, 16974897459201404132, 10985726338269],
    [13521405041909411105, 13398576176159101588, 52374249],
    [3206744593298092012, 966134380754314586, 0],
    [13914648122214918505, 966134380, 0],
    [1, 0, 28929557528576],
    [1235541077112082496, 10284586955251725350, 18930287014145],
    [12014985518315533846, 5294476488634150890, 6863858321906],
    [1561535086344155741, 15833244538135063322, 8922560993999],
    [12761747276316224577, 10348512742273116663, 29231740429018],
    [9745594781103966137, 13658504610142595662, 944648155695],
    [17514238702394846785, 11956362239240850265, 31274727277488],
    [2428898913707151713, 13415901703662731780, 24781279820330],
    [71666709959904945, 5161774027546852761, 15890828026061],
    [4049380135452919193, 15274384838790587710, 25528771591698],
    [18422240861777453733, 14233354597679374928, 8633231729592],
    [2914504416394425696, 4274656492162486920, 15511652704697],
    [12721377795748989418, 12040276505541795045, 28538717650071],
    [2626074459217717422, 13238307206256765456, 9780696608634],
    [4261529925046307655, 12850161204172713270, 27538950399540],
    [11536038685430305586, 17531777095001445153, 14833304857490],
    [12555757789435162768, 5623628114515245989, 3432398830065],
    [11905178684546080059, 7357116143579573376, 3432],
    [14032797718924543051, 63316582777114, 0],
    [10750340288005853484, 63316, 0],
    [1, 0, 3770192756736],
    [9660290106216358253, 3555734177475596581, 18809759043258],
    [14820142034615351103, 14001876724756424381, 23482984450425],
    [12674041783707777619, 18159905057231476139, 3997302774714],
    [15386686816442679994, 5585207679308509466, 15756756160413],
    [5679510383719146248, 13948697622866724671, 9709531676044],
    [1391101719248678506, 9807691927739036431, 14894857496045],
    [3364596672173710517, 15818010096140820917, 18338305194542],
    [11276509210104319732, 5629845624785010942, 21497515952034],
    [5316312656902630164, 9517635131137734706, 17799033574393],
    [17470981304473644647, 619338244618780584, 15186630591879],
    [7373293636384920591, 11632367007491958898, 10007655037778],
    [7616810902585191937, 12083314261009739915, 14263915095831],
    [12740295655921903924, 16880538609458881649, 12884943484855],
    [18366635945916526940, 17404223674486504227, 29517384299092],
    [4472171448243407067, 7089067015287185432, 19979140526925],
    [229592460858185629, 2592264228029443647, 26137727159819],
    [12749672866417114996, 13413731084370224439, 224945689],
    [9452256722867098693, 4149515568880992958, 0],
    [16251451636418604634, 4149515568, 0],
    [1, 0, 12632505450496],
    [4515791283442995454, 9323915941641553424, 16976658968920],
    [13306155670047701346, 12155831029092699563, 31748943102544],
    [4456930152933417601, 17397171276588232675, 19842643721220],
    [9089157128546489637, 11874560617553253768, 16787728846210],
    [12437332180345515840, 13444839516837727953, 2075921269139],
    [3433060408790452524, 16994416043584590670, 23428860839963],
    [8275594526021936172, 15879694502877015729, 20001229560708],
    [3846512444641107689, 4234647645735263358, 1045432520225],
    [6210962618469046250, 7978589901512919495, 2200331453461],
    [7272858906616296575, 6114237175390859893, 8558469384344],
    [3710743300451225347, 8658612872088282707, 10160555860334],
    [6424677242672030600, 10253813330683324852, 27203720423344],
    [11485842256170301862, 13289465061747830990, 29064223517251],
    [7355797963557024308, 4123165538545565411, 25185425355144],
    [6358188982569427273, 7846417485927038480, 9209572581985],
    [12475094728768767402, 10562273346358018863, 14887145907193],
    [17288154837907896183, 2691512658346619119, 14742040721959],
    [2983850577727105262, 751187558544605997, 14742],
    [13918604635001185935, 271942652322184, 0],
    [12033220395769876327, 271942, 0],
    [1, 0, 357203705856],
    [5782377197813462997, 3757709791947931307, 10418187174245],
    [17732139848231399226, 3452755398462519464, 29039168366770],
    [3628839527415562921, 3105818720159874522, 9418913935727],
    [3188692267613601004, 16859138458894499363, 14997665260746],
    [5168130193478377352, 12271894740606233754, 27608294341269],
    [12556227529405091290, 5429638071845793700, 23648007875544],
    [15087090312791441192, 145278150038876888, 15044490615904],
    [10281804758610642494, 9050266019724932449, 28345645480644],
    [14238177586158586580, 11907016253451490865, 21722134048441],
    [7107927498217678128, 2472757296513770734, 30761572390106],
    [3845814658485364450, 10558733798178239359, 3660862879785],
    [714293333681725946, 15917322570831255849, 14445664308812],
    [16766172658649116982, 12254334656791355237, 14648426608749],
    [812461421432632215, 7869542424662730261, 27876074731832],
    [15218024718633799196, 1378558986933000252, 4756732996836],
    [8110797782612805146, 13521405041909411104, 9562173837972],
    [15941193964933529227, 3206744593298092011, 2668754314586],
    [14144280602323277933, 13914648122214918504, 966134380],
    [15072402647813125245, 17822033662586700072, 0],
    [10822706091283369889, 17822033662, 0],
    [15163844593710966731, 17, 0],
    [1, 0, 13350066978816],
    [2408529687792073670, 1235541077112082495, 12266651333670],
    [3980682212356510808, 12014985518315533845, 11034084650986],
    [4202670442792148519, 1561535086344155740, 27127691815706],
    [9419583343154651922, 12761747276316224576, 10830528309751],
    [16359166491570434575, 9745594781103966136, 19289949448782],
    [12567727056384237385, 17514238702394846784, 516131670873],
    [2068388267923286639, 2428898913707151712, 32153003885060],
    [5689135844565021196, 71666709959904944, 9534219517337],
    [3104061965171139313, 4049380135452919192, 8784998671678],
    [7955173880156328016, 18422240861777453732, 4744157995600],
    [1445179403240833754, 2914504416394425695, 23781689627272],
    [12538201164459126715, 12721377795748989417, 10768142359781],
    [7580606719088482667, 2626074459217717421, 27958231018000],
    [8168318283218819755, 4261529925046307654, 4897625369910],
    [5249615277755961676, 11536038685430305585, 15269680648993],
    [6312997372068219831, 12555757789435162767, 11392645381029],
    [9183815417025176703, 11905178684546080058, 16666760719488],
    [10683849953373876937, 14032797718924543050, 30548582777114],
    [17175012155615667568, 10750340288005853483, 63316],
    [18003508288378896912, 1167984798111281, 0],
    [14722554560950996951, 1167984, 0],
    [1, 0, 4389523685376],
    [15059324482416394930, 9660290106216358252, 9917803401509],
    [4134778595813308312, 14820142034615351102, 5547687061181],
    [16321118342639660948, 12674041783707777618, 12570834113963],
    [1523550293123468805, 15386686816442679993, 1855307886874],
    [8016371634569878509, 5679510383719146247, 29455075411775],
    [9884220139611134110, 1391101719248678505, 8629182395151],
    [7218073002727840414, 3364596672173710516, 254611300789],
    [16062235669481359233, 11276509210104319731, 14386288197886],
    [15558048660560338002, 5316312656902630163, 32680947103794],
    [8394398745765058609, 17470981304473644646, 10354399707048],
    [5693296366442904274, 7373293636384920590, 12427412908146],
    [11783494675061161358, 7616810902585191936, 9329690652811],
    [13377293110865447894, 12740295655921903923, 15139995657329],
    [12840734051093062130, 18366635945916526939, 8216242436899],
    [7009868331566697505, 4472171448243407066, 11839012446232],
    [5019690705031194477, 229592460858185628, 9527691161151],
    [8608277240439804984, 12749672866417114995, 17086512407863],
    [12172482590657749222, 9452256722867098692, 5424880992958],
    [16613484892678771990, 16251451636418604633, 4149515568],
    [5721488662757049244, 2758075434182769113, 4],
    [386931106438877039, 76545051729, 0],
    [10054429752182825659, 76, 0],
    [1, 0, 1552244801536],
    [8634592106137071313, 4515791283442995453, 19883721328144],
    [12626356501369830731, 13306155670047701345, 12259241610667],
    [4803333258178976933, 4456930152933417600, 21896492724195],
    [13613083223558209297, 9089157128546489636, 20177674229128],
    [16106967997237446989, 12437332180345515839, 4942186106577],
    [14832921244380020170, 3433060408790452523, 11953448620878],
    [13774024637717231397, 8275594526021936171, 7294208519857],
    [9673012968505228885, 3846512444641107688, 18887336696958],
    [5391832334264815667, 6210962618469046249, 29301394262471],
    [16514436292632703088, 7272858906616296574, 26195201159797],
    [12025036352783454153, 3710743300451225346, 27060348282451],
    [7059867105311401050, 6424677242672030599, 12494622648756],
    [12769210631552594670, 11485842256170301861, 32483398758606],
    [8328873878884556145, 7355797963557024307, 15888344678115],
    [1016565892414238685, 6358188982569427272, 815676276240],
    [9662978461927250281, 12475094728768767401, 12527937192751],
    [13729967277551868112, 17288154837907896182, 813161754863],
    [6371593776693359475, 2983850577727105261, 24968754529069],
    [17617208110845643245, 13918604635001185934, 9798652322184],
    [14960960225633086797, 12033220395769876326, 271942],
    [12090634301321662558, 5016456510113118, 0],
    [9409926148478635503, 5016456, 0],
    [1, 0, 16043313463296],
    [4307062684900157136, 5782377197813462996, 14504961261227],
    [15300759383869911853, 17732139848231399225, 15834196719784],
    [16007534237643445447, 3628839527415562920, 32291172859354],
    [7138502295759677634, 3188692267613601003, 11418280164899],
    [8218537071653683708, 5168130193478377351, 12196680674458],
    [2254219416760329296, 12556227529405091289, 29400817872804],
    [3057410459568460683, 15087090312791441191, 13665557377752],
    [8217810929938874370, 10281804758610642493, 22065771853153],
    [11741126472498340929, 14238177586158586579, 25838385321521],
    [1175325363726654805, 7107927498217678127, 13183208482030],
    [9428843070696730900, 3845814658485364449, 22825038721919],
    [12662500978715131896, 714293333681725945, 8037908896041],
    [6443045597035184564, 16766172658649116981, 26133044043621],
    [1921385512639171183, 812461421432632214, 22588824970773],
    [10469475094355551399, 15218024718633799195, 11552439687228],
    [14679174489076953574, 8110797782612805145, 28651864173856],
    [11853074234719825644, 15941193964933529226, 10600766762987],
    [8270896886596139124, 14144280602323277932, 16680817076584],
    [16532667046659118126, 15072402647813125244, 9982586700072],
    [148341279888833483, 10822706091283369888, 17822033662],
    [10364629296397276041, 15163844593710966730, 17],
    [14265682585545771671, 328758493846, 0],
    [13991741872911347878, 328, 0],
    [1, 0, 20543130566656],
    [14029045786848724433, 2408529687792073669, 30229215793215],
    [4005878521026842341, 3980682212356510807, 12892227827221],
    [3428326338640386488, 4202670442792148518, 11328510636636],
    [1010001558294829380, 9419583343154651921, 18360886832192],
    [2012063724327403418, 16359166491570434574, 11840681297848],
    [10997154538851372612, 12567727056384237384, 20832112127552],
    [1917749645489607898, 2068388267923286638, 3760308408672],
    [9763872523711218805, 5689135844565021195, 17816168271536],
    [15875699078454059311, 3104061965171139312, 25252431250840],
    [10966529452671276106, 7955173880156328015, 13663078343332],
    [18073244132105736913, 1445179403240833753, 2537679697247],
    [4435241176994913173, 12538201164459126714, 26797410945513],
    [5464400086219074323, 7580606719088482666, 2886442805421],
    [2445909179323258812, 8168318283218819754, 21297284582214],
    [873962058644121211, 5249615277755961675, 28815342228273],
    [16675872194112650857, 6312997372068219830, 23866497855631],
    [10680102689274800355, 9183815417025176702, 17482579172666],
    [2370498083108897524, 10683849953373876936, 20779931059274],
    [15354400521451334666, 17175012155615667567, 5681975972139],
    [259991949657381021, 18003508288378896911, 21104798111281],
    [10335286558772966917, 14722554560950996950, 1167984],
    [16337526653906757263, 21545516652742137, 0],
    [12040967163702784894, 21545516, 0],
    [1, 0, 8556816367616],
    [3373309160242342187, 15059324482416394929, 14142224146796],
    [13639841054510584221, 4134778595813308311, 14930884769598],
    [15898855427739708031, 16321118342639660947, 697082591826],
    [4544387940067005419, 1523550293123468804, 25351434568377],
    [5281598644835398575, 8016371634569878508, 11881535824647],
    [13675642405083408835, 9884220139611134109, 7348391292521],
    [3973392623768015721, 7218073002727840413, 20211870735540],
    [4491285101509114191, 16062235669481359232, 11027843403507],
    [15002304272810270500, 15558048660560338001, 28262455061267],
    [17325098540619893468, 8394398745765058608, 5134308634214],
    [1137212864974584822, 5693296366442904273, 11776638784526],
    [2619406097224859078, 11783494675061161357, 26931725184512],
    [8281347529729293732, 13377293110865447893, 29019696097587],
    [11344719666795450104, 12840734051093062129, 18650380005723],
    [17283870506679425783, 7009868331566697504, 22428272117978],
    [11054210518010603775, 5019690705031194476, 32627466655644],
    [6399455551799092885, 8608277240439804983, 5188659871603],
    [12930529916573967170, 12172482590657749221, 28249900618820],
    [14550097052337552404, 16613484892678771989, 31193310162521],
    [12487632712206414748, 5721488662757049243, 19537020975577],
    [5791017277843595715, 386931106438877038, 76545051729],
    [10227264183449036113, 10054429752182825658, 76],
    [2006055278511721441, 1412006979354, 0],
    [128746359043876333, 1412, 0],
    [1, 0, 20733468082176],
    [7408146306870995754, 8634592106137071312, 14689684476157],
    [8299024588195267962, 12626356501369830730, 25216260389217],
    [1497052939192040881, 4803333258178976932, 5412737966720],
    [16771714264265803747, 13613083223558209296, 28479873160484],
    [142988846654429432, 16106967997237446988, 2347804094271],
    [11839838367716104145, 14832921244380020169, 25643746691371],
    [6019646776647679765, 13774024637717231396, 24296524375083],
    [4611972391702034948, 9673012968505228884, 22505292291816],
    [16447182322205429545, 5391832334264815666, 29822895249385],
    [2113477168726764245, 16514436292632703087, 20226651878526],
    [3536261187802311516, 12025036352783454152, 9095382716162],
    [18444381860986709854, 7059867105311401049, 14757692220295],
    [4734315730275909838, 12769210631552594669, 12851451509157],
    [9974936316849658174, 8328873878884556144, 24904055108147],
    [11864423681540657642, 1016565892414238684, 17833523831112],
    [8207245621417902667, 9662978461927250280, 30582744303017],
    [7992526918695295028, 13729967277551868111, 10477345404790],
    [8679354522130259987, 6371593776693359474, 26254955030765],
    [6065763799692166461, 17617208110845643244, 20326811035278],
    [18143341109049024976, 14960960225633086796, 1374655434598],
    [15242492331283350570, 12090634301321662557, 2952510113118],
    [9986352353182266963, 9409926148478635502, 5016456],
    [17340463289911536077, 92537289398950870, 0],
    [7359344614214233035, 92537289, 0],
    [1, 0, 30676233486336],
    [419091135888749535, 4307062684900157135, 12089829455828],
    [1073142712661309790, 15300759383869911852, 17064867770169],
    [11076438902195672286, 16007534237643445446, 15595386978984],
    [1820390940081322073, 7138502295759677633, 24455445527787],
    [18417808973944523597, 8218537071653683707, 19929122201479],
    [10251294197731582957, 2254219416760329295, 16167165742553],
    [1502394029870156428, 3057410459568460682, 1597445488423],
    [321014853559106075, 8217810929938874369, 19155636487741],
    [2390953058510591778, 11741126472498340928, 25903063714515],
    [10685224265907994087, 1175325363726654804, 9953511138607],
    [5967405799190505023, 9428843070696730899, 25081686435553],
    [11210723659228214761, 12662500978715131895, 12597349278201],
    [12327123641078462773, 6443045597035184563, 29590104158517],
    [1709976940107894237, 1921385512639171182, 3611567551382],
    [16607686590938553511, 10469475094355551398, 1561795759643],
    [18332088094272679457, 14679174489076953573, 16010642556441],
    [2946170632136780882, 11853074234719825643, 22636448366218],
    [4824449494694383419, 8270896886596139123, 29820896237676],
    [17008332258693407134, 16532667046659118125, 20384008041596],
    [1773419466622750661, 148341279888833482, 10186561867680],
    [3892343466023784379, 10364629296397276040, 662773344202],
    [12001571085575422796, 14265682585545771670, 328758493846],
    [12933506765500977582, 13991741872911347877, 328],
    [11884830007749143734, 6064523798049, 0],
    [9662368568096205337, 6064, 0],
    [1, 0, 15301760516096],
    [16801499925276664442, 14029045786848724432, 21591217159109],
    [10492407990787637084, 4005878521026842340, 24102185849943],
    [7673849751013230269, 3428326338640386487, 25361054752294],
    [6046724489853072367, 1010001558294829379, 29198109074193],
    [3723941391207507903, 2012063724327403417, 8008596156942],
    [16844122108860347659, 10997154538851372611, 10862103961416],
    [10622020182694668027, 1917749645489607897, 29195529300590],
    [8741198820686854862, 9763872523711218804, 8944860623371],
    [6855480461211306807, 15875699078454059310, 4175594496752],
    [10005708458011566304, 10966529452671276105, 729979752527],
    [8932093106442919061, 18073244132105736912, 12218240434905],
    [9062763476260756743, 4435241176994913172, 22890296225722],
    [13664977682032775521, 5464400086219074322, 6826132593002],
    [1078499125430623453, 2445909179323258811, 4427047377578],
    [6554586738078431161, 873962058644121210, 19382904000843],
    [12177313698643242883, 16675872194112650856, 9342578969526],
    [16615072271904633953, 10680102689274800354, 29384128504958],
    [16375404983106569285, 2370498083108897523, 25967832363720],
    [13552251831473522729, 15354400521451334665, 527014094191],
    [8330500218412111874, 259991949657381020, 4054560277007],
    [7044338079053294004, 10335286558772966916, 17913885659094],
    [2688849443046530184, 16337526653906757262, 16940652742137],
    [855940991879596845, 12040967163702784893, 21545516],
    [7344363609485825662, 397444631628981487, 0],
    [11602660525134634992, 397444631, 0],
    [1, 0, 17073182867456],
    [16945343208344873835, 3373309160242342186, 14231739417265],
    [9617992661337889145, 13639841054510584220, 12179861878679],
    [18280344933262742088, 15898855427739708030, 3588246351763],
    [5179975582362777795, 4544387940067005418, 7148286316036],
    [1798918997870037130, 5281598644835398574, 6301741358060],
    [6327667344756325883, 13675642405083408834, 6813215398045],
    [18380327574124007701, 3973392623768015720, 1920243473053],
    [18015447557304295289, 4491285101509114190, 23633813276544],
    [10315590748073249878, 15002304272810270499, 6192939195473],
    [7697916092577993382, 17325098540619893467, 31441061648432],
    [3124132817942110723, 1137212864974584821, 15757141998289],
    [7448238998520507049, 2619406097224859077, 19413448932749],
    [13892823322374205297, 8281347529729293731, 8689614998485],
    [11042137840046332564, 11344719666795450103, 3104936960497],
    [10513966307445593804, 17283870506679425782, 26476599249952],
    [9388437460943526958, 11054210518010603774, 5175346915180],
    [10967228614677896228, 6399455551799092884, 8421700965431],
    [2310996671540235542, 12930529916573967169, 21781788762341],
    [4989110555003898587, 14550097052337552403, 923676955925],
    [16271452421983657679, 12487632712206414747, 3950313931675],
    [9523160181437090473, 5791017277843595714, 25274554421102],
    [13137707423765072250, 10227264183449036112, 10010108748474],
    [16846859744221860705, 2006055278511721440, 1412006979354],
    [7767140033449795569, 128746359043876332, 1412],
    [17169456915721160017, 26046931378436, 0],
    [17180899661833327819, 26046, 0],
    [1, 0, 11984401596416],
    [17572520700934791416, 7408146306870995753, 15690449891024],
    [17968798858233825417, 8299024588195267961, 23716081155402],
    [15338423313945305609, 1497052939192040880, 16144909196452],
    [17895321323836726301, 16771714264265803746, 18764007751440],
    [814069333008965773, 142988846654429431, 15817641838924],
    [7200328959852723947, 11839838367716104144, 14116326325705],
    [759884557248133773, 6019646776647679764, 15956250015524],
    [13410165861863974851, 4611972391702034947, 20530891603540],
    [6278452420856351570, 16447182322205429544, 28783114571826],
    [9072115382556676442, 2113477168726764244, 4040191701103],
    [2755882551854926563, 3536261187802311515, 9305999871944],
    [8496072611504649269, 18444381860986709853, 29421256647769],
    [4122009033579215815, 4734315730275909837, 7536540742381],
    [10222217724450527221, 9974936316849658173, 28636643171696],
    [2064539481554006325, 11864423681540657641, 6504444915676],
    [7935605886598063693, 8207245621417902666, 22735433275752],
    [7805147585347548429, 7992526918695295027, 13170470508751],
    [5709020905457661273, 8679354522130259986, 18924328825714],
    [16257370307404906674, 6065763799692166460, 11596983552492],
    [14971258192939373646, 18143341109049024975, 20573826297164],
    [1133404845901376390, 15242492331283350569, 3566541361245],
    [9460827548162822047, 9986352353182266962, 7126940028398],
    [1273897659779791346, 17340463289911536076, 457398950870],
    [7833262224435092783, 7359344614214233034, 92537289],
    [3033420566713364587, 1707011694817242694, 0],
    [15075466825360349103, 1707011694, 0],
    [1, 0, 26319022718976],
    [2484134775182816690, 419091135888749534, 29484058175183],
    [18400539815335991277, 1073142712661309789, 5318600454956],
    [485494064952118286, 11076438902195672285, 26817098683590],
    [17577048805241314891, 1820390940081322072, 507998431425],
    [2863946907557583807, 18417808973944523596, 9295555723771],
    [13045307417786230800, 10251294197731582956, 21386081444943],
    [12032088871615097766, 1502394029870156427, 16385017402250],
    [8848763446997690580, 321014853559106074, 25664129613825],
    [10031289150307672684, 2390953058510591777, 7508579247168],
    [11592215575498656563, 10685224265907994086, 12563323493716],
    [15894436747956898388, 5967405799190505022, 32759607734547],
    [2091546719588500923, 11210723659228214760, 16819668254711],
    [5863809244813756109, 12327123641078462772, 2670092698035],
    [11303008753675411245, 1709976940107894236, 9382900304494],
    [13238426537506910532, 16607686590938553510, 29157993784486],
    [17258458071023005565, 18332088094272679456, 28395159712229],
    [8385733444777075179, 2946170632136780881, 30835261533931],
    [9530757096163247300, 4824449494694383418, 21549922023539],
    [14423000845391072217, 17008332258693407133, 31690096137261],
    [10953140011159884311, 1773419466622750660, 21384211004362],
    [12228340237948264127, 3892343466023784378, 2710650606472],
    [11279134946966259189, 12001571085575422795, 28837701126806],
    [14640097792684582651, 12933506765500977581, 26145644277925],
    [6232313315128656728, 11884830007749143733, 6064523798049],
    [16136121832933322088, 9662368568096205336, 6064],
    [15074767079673358271, 111870718431542, 0],
    [13252722804829281908, 111870, 0],
    [1, 0, 1488910811136],
    [7740175894281560509, 16801499925276664441, 3812568794576],
    [15670495392425593226, 10492407990787637083, 6583416000228],
    [15152257626756992778, 7673849751013230268, 6467327793591],
    [4090073428152440422, 6046724489853072366, 32665201875267],
    [14450327772834205584, 3723941391207507902, 3651913121689],
    [4466091895542494216, 16844122108860347658, 5337575820867],
    [10454115378553795377, 10622020182694668026, 1140473861337],
    [2267817233475657788, 8741198820686854861, 8494371636340],
    [5500455702636497521, 6855480461211306806, 5193542410542],
    [15178768299492252549, 10005708458011566303, 21200484209737],
    [7062359872332045590, 8932093106442919060, 7060491293392],
    [12297347290027942576, 9062763476260756742, 11026740779924],
    [8030124596941085588, 13664977682032775520, 6075058465554],
    [6526656990996654843, 1078499125430623452, 26234355324859],
    [6254287345256979850, 6554586738078431160, 32360660133498],
    [6642007136244870032, 12177313698643242882, 10466900704872],
    [2027592955437164718, 16615072271904633952, 17139887712482],
    [942718349157325567, 16375404983106569284, 27657734669043],
    [14617066671884002278, 13552251831473522728, 6300451597321],
    [6831631114396133348, 8330500218412111873, 13828381874332],
    [14603040013386939258, 7044338079053294003, 9870145762820],
    [9906106765319401103, 2688849443046530183, 13181046400654],
    [1396179595609933063, 855940991879596844, 9455398138749],
    [11524884268464976417, 7344363609485825661, 1559628981487],
    [382929570730827274, 11602660525134634991, 397444631],
    [6109721884461301381, 7331559403129590068, 0],
    [2390514825000339691, 7331559403, 0],
    [6116191454763441755, 7, 0],
    [1, 0, 26922918608896],
    [11598868771099176310, 16945343208344873834, 4508521392426],
    [14449966445520085105, 9617992661337889144, 27262990979484],
    [11675595287405614726, 18280344933262742087, 21482280807038],
    [15860796398550489897, 5179975582362777794, 13230097519594],
    [16180408435245829662, 1798918997870037129, 27074343023534],
    [13756992797154950706, 6327667344756325882, 4968996399554],
    [8830551328786758466, 18380327574124007700, 31054976619368],
    [16699955256560951264, 18015447557304295288, 24355559209294],
    [10038983627153402074, 10315590748073249877, 2779417304867],
    [15085100736692127346, 7697916092577993381, 31733169359579],
    [10007783780289711125, 3124132817942110722, 32197403769845],
    [17596907048353602192, 7448238998520507048, 15779753131461],
    [13530650344896573509, 13892823322374205296, 3831598595491],
    [6337724853398437005, 11042137840046332563, 23286569963255],
    [12768885008904063297, 10513966307445593803, 10494508948214],
    [2759773619512884114, 9388437460943526957, 26260594534654],
    [8434364600126655292, 10967228614677896227, 25409125279380],
    [3843827521199949338, 2310996671540235541, 15379270460225],
    [4661660852957808994, 4989110555003898586, 29595882077203],
    [15298044134177324417, 16271452421983657678, 25026516251547],
    [7747773274913338217, 9523160181437090472, 9552712196546],
    [10348785912020632966, 13137707423765072249, 3040913270096],
    [4175372293197190170, 16846859744221860704, 26092421057504],
    [11326064156813083145, 7767140033449795568, 8452930758124],
    [8100407170505981763, 17169456915721160016, 26046931378436],
    [1706556116319916846, 17180899661833327818, 26046],
    [15028897280749641942, 480481077043500, 0],
    [1421201742071739121, 480481, 0],
    [1, 0, 27433952608256],
    [8480737406125178272, 17572520700934791415, 1401974090537],
    [10947205650755620361, 17968798858233825416, 32176831497593],
    [868577942165647781, 15338423313945305608, 18402970107312],
    [16017710019091388479, 17895321323836726300, 6391044130786],
    [6610879150827623375, 814069333008965772, 22480390330615],
    [12110095866223762092, 7200328959852723946, 32532041193424],
    [7756802952949470775, 759884557248133772, 31235726966548],
    [2941800790804618759, 13410165861863974850, 3880340355587],
    [11703600274199927522, 6278452420856351569, 27348491800360],
    [806737539257940346, 9072115382556676441, 11099149396692],
    [14579028397110132023, 2755882551854926562, 26461460573019],
    [14247808875344366934, 8496072611504649268, 16589223454557],
    [9713379923695279513, 4122009033579215814, 6461554147533],
    [2246428675703313877, 10222217724450527220, 4585111918909],
    [3549783776592680620, 2064539481554006324, 586430190057],
    [12645029747929213033, 7935605886598063692, 6195423117898],
    [16279009267476580506, 7805147585347548428, 8210309486643],
    [343358782242907186, 5709020905457661272, 17724881313810],
    [10077054739085890321, 16257370307404906673, 25039811593532],
    [10526715404712173586, 14971258192939373645, 1065061441999],
    [11438715865125144243, 1133404845901376389, 13906512872489],
    [5040916178827294801, 9460827548162822046, 27084069058130],
    [16643761637275849508, 1273897659779791345, 27594424641996],
    [4852542977279030386, 7833262224435092782, 28230164442058],
    [7883373066544387129, 3033420566713364586, 28270817242694],
    [16699064314768500978, 15075466825360349102, 1707011694],
    [6805863634444817214, 13042063791413317777, 1],
    [2266540253968903500, 31488807865, 0],
    [9016913589137908810, 31, 0],
    [1, 0, 29662134665216],
    [11654451024602552034, 2484134775182816689, 31069997495262],
    [5299013208454526793, 18400539815335991276, 21725026318685],
    [14918550373926182540, 485494064952118285, 30808952853725],
    [6225552657491071054, 17577048805241314890, 2892155254872],
    [10344713496596235785, 2863946907557583806, 25580707187532],
    [12972405634433280209, 13045307417786230799, 2699652260844],
    [12911885282402784945, 12032088871615097765, 14874479692427],
    [6934311832970995868, 8848763446997690579, 22305543797274],
    [9975729197003430461, 10031289150307672683, 32230628415265],
    [1982857556803548935, 11592215575498656562, 9790861639142],
    [2095735223386298223, 15894436747956898387, 30184113382974],
    [7110931538347639365, 2091546719588500922, 14644317877736],
    [15822183724630969535, 5863809244813756108, 3548612737332],
    [16931982690156327501, 11303008753675411244, 7334717656540],
    [6740069226761666110, 13238426537506910531, 28192935582886],
    [3138792961008474902, 17258458071023005564, 27729454591520],
    [12154594426971851390, 8385733444777075178, 20282516663377],
    [15780127219221910902, 9530757096163247299, 24989781872442],
    [16421541930960194381, 14423000845391072216, 20420593770909],
    [7485894627196740576, 10953140011159884310, 4026662899652],
    [8897269432694476707, 12228340237948264126, 843611443130],
    [17189823634941678805, 11279134946966259188, 4525793641291],
    [9585582064286255216, 14640097792684582650, 27829337854381],
    [12835472279575022097, 6232313315128656727, 10776874740917],
    [6776016669542754608, 16136121832933322087, 20790817204760],
    [18340015775620871027, 15074767079673358270, 13566718431542],
    [5254188752292365830, 13252722804829281907, 111870],
    [6798802596750151183, 2063650512248692, 0],
    [9449320530215272000, 2063650, 0],
    [1, 0, 8825419595776],
    [17110720482574968811, 7740175894281560508, 32603849499257],
    [16172441693558688213, 15670495392425593225, 1724821405531],
    [6234654946353717320, 15152257626756992777, 29678221723324],
    [11180283100679445438, 4090073428152440421, 10174783353838],
    [14852260031176961272, 14450327772834205583, 13578242107326],
    [4481533167346438750, 4466091895542494215, 9978566718730],
    [4269718344362365664, 10454115378553795376, 31437122938618],
    [11520029752381101466, 2267817233475657787, 2870298180301],
    [16778682550309368417, 5500455702636497520, 8415822842678],
    [9687587467301363608, 15178768299492252548, 23700382851295],
    [10093971076828497318, 7062359872332045589, 7430666640532],
    [1913763026490934696, 12297347290027942575, 20832435313926],
    [12701450127613557000, 8030124596941085587, 7388353810784],
    [8974572160711134644, 6526656990996654842, 14264339045596],
    [9890000077336694124, 6254287345256979849, 28546360063928],
    [4292326716201059148, 6642007136244870031, 29792109916034],
    [14644519175104337420, 2027592955437164717, 1092051104864],
    [5051178622270136798, 942718349157325566, 18472792392772],
    [675983118348065839, 14617066671884002277, 6145370343464],
    [4431647660065117244, 6831631114396133347, 10675791632385],
    [8316115180008411962, 14603040013386939257, 7303537011123],
    [9621158095544965602, 9906106765319401102, 19244075687047],
    [15283478958951102072, 1396179595609933062, 22141624765228],
    [13981553073094447813, 11524884268464976416, 24559020758653],
    [4558368743929911607, 382929570730827273, 20788331208687],
    [15217004469858477791, 6109721884461301380, 14315129590068],
    [11589190369996515737, 2390514825000339690, 7331559403],
    [3670624237398152929, 6116191454763441754, 7],
    [13471713758418039777, 135243399970, 0],
    [4489936967610296411, 135, 0],
    [1, 0, 27498628775936],
    [9052049303222747950, 11598868771099176309, 22904783334250],
    [1011330006193020538, 14449966445520085104, 21063632935288],
    [17412075644359478612, 11675595287405614725, 14530859815495],
    [6358678384745980468, 15860796398550489896, 18569877141698],
    [15262353928842850919, 16180408435245829661, 15866745768073],
    [11145257686438581736, 13756992797154950705, 4372478705146],
    [1600562031807691890, 8830551328786758465, 8056905306388],
    [6775147337046626724, 16699955256560951263, 19541544214392],
    [15772127322106297822, 10038983627153402073, 21157817764949],
    [4141472200527441474, 15085100736692127345, 25090542523045],
    [18246007807879281267, 10007783780289711124, 10920953930242],
    [960746958654787123, 17596907048353602191, 28528733498024],
    [11355981212264408477, 13530650344896573508, 23187343568752],
    [1573078209576251481, 6337724853398437004, 22219692202643],
    [6245294478780491367, 12768885008904063296, 23597149607627],
    [7523292955659721510, 2759773619512884113, 7203457227821],
    [14454736751015226505, 8434364600126655291, 3349208374307],
    [7219786377781411316, 3843827521199949337, 19162252709141],
    [10597123082209392431, 4661660852957808993, 24270829308634],
    [6922353544343010714, 15298044134177324416, 19112420007630],
    [14317523356293377430, 7747773274913338216, 2425561008808],
    [4057766168681892717, 10348785912020632965, 4960226347385],
    [15214083611901244045, 4175372293197190169, 8176613987168],
    [8390569016883950721, 11326064156813083144, 1360439123952],
    [10680472538208175055, 8100407170505981762, 21706092512592],
    [12173567833130544927, 1706556116319916845, 8492814718154],
    [1386341248286610026, 15028897280749641941, 21729077043500],
    [12487300952797237352, 1421201742071739120, 480481],
    [2614759871804869720, 8863311460481781, 0],
    [8494389567327729477, 8863311, 0],
    [1, 0, 8439459741696],
    [6260469580539185878, 8480737406125178271, 18568593449207],
    [17818573101084525841, 10947205650755620360, 8712047085704],
    [2201029069927307150, 868577942165647780, 23580868321800],
    [10397997613804897039, 16017710019091388478, 24716358376476],
    [14269915965770103741, 6610879150827623374, 16106656489612],
    [16776139909196366727, 12110095866223762091, 31372420497130],
    [6246513436385199720, 7756802952949470774, 26562159475340],
    [2926026498821554288, 2941800790804618758, 2897634453442],
    [15725499391028340982, 11703600274199927521, 20825043733329],
    [8576577277771450827, 806737539257940345, 2786790330713],
    [15523351176022259335, 14579028397110132022, 29748772375266],
    [4775158829429176134, 14247808875344366933, 15302526563380],
    [10141817222123532462, 9713379923695279512, 22516121779142],
    [12847658900242624586, 2246428675703313876, 12596192434164],
    [13708197964460514655, 3549783776592680619, 9804685488436],
    [1951540006613246932, 12645029747929213032, 29964882486860],
    [9979297327280092199, 16279009267476580505, 13656018613516],
    [15381307706282553684, 343358782242907185, 16561546278232],
    [10037428657543061177, 10077054739085890320, 21581570654385],
    [2584877324547208668, 10526715404712173585, 27525620094029],
    [1126624732730703576, 11438715865125144242, 3998273268613],
    [1501064139624981020, 5040916178827294800, 14833902260126],
    [5219661484955306109, 16643761637275849507, 7470263056881],
    [5336997298570282212, 4852542977279030385, 28778427358510],
    [12191131175733833362, 7883373066544387128, 6062905258090],
    [3707068178994436536, 16699064314768500977, 20625368946606],
    [5045484691732942022, 6805863634444817213, 5049122869393],
    [14847900542908711232, 2266540253968903499, 31488807865],
    [9097257915916965135, 9016913589137908809, 31],
    [2472027983230314217, 580865979874, 0],
    [15974509111133272205, 580, 0],
    [1, 0, 30129631789056],
    [12099486841948187399, 11654451024602552033, 6124287260081],
    [5319910566029976328, 5299013208454526792, 3085808736236],
    [11549214421017285864, 14918550373926182539, 24138337487885],
    [1998791413186046700, 6225552657491071053, 23486560788042],
    [17075171930090011210, 10344713496596235784, 10255703235518],
    [15158296003813501474, 12972405634433280208, 27557699954703],
    [1360083178079384115, 12911885282402784944, 10451375909797],
    [6167980558592741158, 6934311832970995867, 8811540785363],
    [3630180428124865653, 9975729197003430460, 2866107490923],
    [2276550099763657677, 1982857556803548934, 19027113610034],
    [407006713016100655, 2095735223386298222, 17850385484371],
    [14242579061653496002, 7110931538347639364, 1740857722298],
    [17944493332678643704, 15822183724630969534, 7980917884620],
    [987185901870869452, 16931982690156327500, 12611365379884],
    [5578665155415167745, 6740069226761666109, 12156170154307],
    [4849210377429577536, 3138792961008474901, 25066658901884],
    [10811995403388891862, 12154594426971851389, 1219855442410],
    [7051931074990177294, 15780127219221910901, 3032890213571],
    [2030832259446664275, 16421541930960194380, 4630405811160],
    [6069512651054767896, 7485894627196740575, 7870482321942],
    [10608701253763958799, 8897269432694476706, 17908931862206],
    [15700053443426906717, 17189823634941678804, 26362519635444],
    [17759719234725541222, 9585582064286255215, 17239695812346],
    [15187321568916405210, 12835472279575022096, 28007367328599],
    [11040156458113129594, 6776016669542754607, 26558994214247],
    [2800727824598008497, 18340015775620871026, 24179284830142],
    [2997236166375604479, 5254188752292365829, 8052368563827],
    [6260091886451512841, 6798802596750151182, 32034512248692],
    [17573059315228347474, 9449320530215271999, 2063650],
    [7519453664590169251, 38067632857031246, 0],
    [15809436065653866529, 38067632, 0],
    [1, 0, 8636927574016],
    [228921437623588922, 17110720482574968810, 18825876709820],
    [2195862230003073884, 16172441693558688212, 20233337981321],
    [960207412233973688, 6234654946353717319, 22117606084361],
    [2464387149230492479, 11180283100679445437, 3983805142629],
    [3631866936444955213, 14852260031176961271, 13319242944399],
    [1578304441149380227, 4481533167346438749, 13104231461895],
    [18190538519673445181, 4269718344362365663, 24635624502064],
    [1271000736479934749, 11520029752381101465, 2672909574203],
    [18292963032817745634, 16778682550309368416, 7044525165168],
    [17168014021925537455, 9687587467301363607, 7445547195268],
    [18046757712870378949, 10093971076828497317, 25263103745301],
    [14857998893911743220, 1913763026490934695, 23443688546991],
    [11933607369968684575, 12701450127613556999, 27386486512531],
    [3483798509902859162, 8974572160711134643, 23945536137978],
    [7378828438829845831, 9890000077336694123, 11151232687497],
    [15791137430347699565, 4292326716201059147, 10413793880975],
    [17044141236829932641, 14644519175104337419, 23294273824941],
    [9075651910862456484, 5051178622270136797, 25573036645118],
    [17811207355884564095, 675983118348065838, 26595240240101],
    [4438638126207305937, 4431647660065117243, 31609450817507],
    [12507972635512950185, 8316115180008411961, 28302521564025],
    [14658269128098109408, 9621158095544965601, 1286828519054],
    [3642436268910286111, 15283478958951102071, 12832757941510],
    [3783099432964819561, 13981553073094447812, 24073247109664],
    [9497579866027539638, 4558368743929911606, 32388824915465],
    [3395179445046271361, 15217004469858477790, 18666628251268],
    [5938502732309497276, 11589190369996515736, 24154198984938],
    [5793671185917606255, 3670624237398152928, 802730303066],
    [889272970253526588, 13471713758418039776, 135243399970],
    [8594177504370135501, 4489936967610296410, 135],
    [7374354721120724712, 2494800386918, 0],
    [14764532643665507567, 2494, 0],
    [1, 0, 28021490712576],
    [5392404173658087695, 9052049303222747949, 24688054824309],
    [4976586473237854316, 1011330006193020537, 22149943910512],
    [6308932742419013569, 17412075644359478611, 6952344704645],
    [4831846642430703059, 6358678384745980467, 19997827373864],
    [18139507855949846901, 15262353928842850918, 15921604185629],
    [4865833876326628410, 11145257686438581735, 15169086766641],
    [14296661839130179261, 1600562031807691889, 8159367281473],
    [9254773150378118248, 6775147337046626723, 26841855008735],
    [12174712433727875143, 15772127322106297821, 1649224509657],
    [705653145340915199, 4141472200527441473, 3092989118065],
    [17763928858962481812, 18246007807879281266, 6799052082196],
    [3982836567612046296, 960746958654787122, 12356615608975],
    [12730849277561967739, 11355981212264408476, 31884085276740],
    [17314488764367235908, 1573078209576251480, 2368338558092],
    [15951418930590301119, 6245294478780491366, 15249407838528],
    [7193356087283467261, 7523292955659721509, 19259783592849],
    [17592945625696089446, 14454736751015226504, 17945391385403],
    [3554461664875361428, 7219786377781411315, 2401574471193],
    [2213779057785318208, 10597123082209392430, 15744375261537],
    [3880940796082421148, 6922353544343010713, 29544776154496],
    [4528237545358141043, 14317523356293377429, 1413219971944],
    [11681196539088147363, 4057766168681892716, 21529824757125],
    [9835005502912643017, 15214083611901244044, 16904454853657],
    [4964088126040986696, 8390569016883950720, 16194578989576],
    [3355564873147047622, 10680472538208175054, 21293659930434],
    [1853093467828272927, 12173567833130544926, 8405075153709],
    [14755341584803008677, 1386341248286610025, 13040676937941],
    [4701571132542556621, 12487300952797237351, 15093141746416],
    [6128849686644853851, 2614759871804869719, 15951460481781],
    [12026867901170202094, 8494389567327729476, 8863311],
    [17909760324981426303, 163499238157084246, 0],
    [2897692901883393664, 163499238, 0],
    [1, 0, 32159339380736],
    [12323704802554838154, 6260469580539185877, 3592965946783],
    [7135886931147821732, 17818573101084525840, 29092119318024],
    [15341283120292884947, 2201029069927307149, 22590563676580],
    [3092789040392634166, 10397997613804897038, 21454773573694],
    [8811761390822097865, 14269915965770103740, 6827909436366],
    [16870860798610218169, 16776139909196366726, 5686338624171],
    [17452041453591904833, 6246513436385199719, 24070158620214],
    [10314783684009874908, 2926026498821554287, 23265852481030],
    [4932636630789274903, 15725499391028340981, 14713464937185],
    [18143884346082124480, 8576577277771450826, 32054841522553],
    [2823209155405527322, 15523351176022259334, 3413258861878],
    [16195396106620226251, 4775158829429176133, 7576549789013],
    [1150544491807648944, 10141817222123532461, 5588696472984],
    [7767455475523884824, 12847658900242624585, 22187743122900],
    [15204378045683991808, 13708197964460514654, 26728105793195],
    [17239732561718805622, 1951540006613246931, 18585540978792],
    [12886430624522800062, 9979297327280092198, 25649833822361],
    [18162250541178258136, 15381307706282553683, 4880544130097],
    [17028935366700158084, 10037428657543061176, 24593140126480],
    [16075467823964198637, 2584877324547208667, 18098061074449],
    [9803858825574498304, 1126624732730703575, 14416081372850],
    [17464070808143041817, 1501064139624981019, 21283282958416],
    [17682703471239266776, 5219661484955306108, 29809289319203],
    [18147688354161351336, 5336997298570282211, 5176660882545],
    [6663423873348080051, 12191131175733833361, 10481200960568],
    [9417270363716235133, 3707068178994436535, 4925273516273],
    [9295013721571344179, 5045484691732942021, 11595804906301],
    [6199479138350037783, 14847900542908711231, 9289493163339],
    [887603005365085688, 9097257915916965134, 30178134008905],
    [333989628642975696, 2472027983230314216, 580865979874],
    [4620735991403939439, 15974509111133272204, 580],
    [12418523063962801201, 10715086071862, 0],
    [1587745622680169419, 10715, 0],
    [1, 0, 22241655914496],
    [10968905082284365638, 12099486841948187398, 30536288392929],
    [14076907092801977812, 5319910566029976327, 7819626084168],
    [3438322122816124202, 11549214421017285863, 4173108354699],
    [14645413324829073676, 1998791413186046699, 17928925646925],
    [12271281439492289999, 17075171930090011209, 26832821732872],
    [6233751789862708246, 15158296003813501473, 22192073730256],
    [1962644459455827991, 1360083178079384114, 10395334366896],
    [8726934184642952500, 6167980558592741157, 23100196792475],
    [4531087719737475147, 3630180428124865652, 30470123412028],
    [481513520412720775, 2276550099763657676, 22382022063878],
    [992149349835802669, 407006713016100654, 16964772091758],
    [11165474436676191361, 14242579061653496001, 3262972772932],
    [10240785855143707184, 17944493332678643703, 12876053515454],
    [10059329918238932466, 987185901870869451, 15933302420044],
    [14791716450947031886, 5578665155415167744, 6933262876221],
    [15378882314737417403, 4849210377429577535, 2685586119445],
    [14726970229242271128, 10811995403388891861, 21877382285949],
    [5090110549507128156, 7051931074990177293, 2892110091637],
    [17185220781106503841, 2030832259446664274, 9183329028940],
    [9858517691519529306, 6069512651054767895, 4002575098847],
    [5595905546638020703, 10608701253763958798, 5332851101602],
    [15555173226968030256, 15700053443426906716, 18543962756308],
    [10745236628845355771, 17759719234725541221, 18960823306351],
    [9973314042399760760, 15187321568916405209, 10543598488080],
    [4374506813558796576, 11040156458113129593, 13170151827759],
    [15960826480426749933, 2800727824598008496, 17925162480498],
    [9636454862798615738, 2997236166375604478, 19982339360261],
    [17973331528911319269, 6260091886451512840, 32319952637454],
    [7366495200039369602, 17573059315228347473, 8782407630399],
    [10505831326526933399, 7519453664590169250, 23984857031246],
    [2803218632575724145, 15809436065653866528, 38067632],
    [8425731874431741636, 702223880805592151, 0],
    [14860552245711912111, 702223880, 0],
    [1, 0, 10218012409856],
    [6993664200669526994, 228921437623588921, 18900119037930],
    [4065363582031999356, 2195862230003073883, 8263052052948],
    [6899780515342669867, 960207412233973687, 7101133594695],
    [17713500890201844939, 2464387149230492478, 27895196883901],
    [6445781125105107086, 3631866936444955212, 21085085560055],
    [13563044070717478571, 1578304441149380226, 4831986111069],
    [13167612994149348885, 18190538519673445180, 21913068901087],
    [5505463469596727288, 1271000736479934748, 12896991663513],
    [12125446212518819372, 18292963032817745633, 8087930679904],
    [12537707724735421794, 17168014021925537454, 1445978316695],
    [15173675086703777069, 18046757712870378948, 17831805453733],
    [13535510174093048476, 14857998893911743219, 30983646922151],
    [10698912997087096629, 11933607369968684574, 3507188857095],
    [16952559548431933861, 3483798509902859161, 19819400007091],
    [13528255827744249993, 7378828438829845830, 17227856039275],
    [14122167436324771955, 15791137430347699564, 5643923964747],
    [13071007137740038297, 17044141236829932640, 25053491992075],
    [13011887609328904025, 9075651910862456483, 7214965547485],
    [3116434332871336590, 17811207355884564094, 21563240619054],
    [9050993820536772770, 4438638126207305936, 4921678058555],
    [11993719123438634238, 12507972635512950184, 23009794626361],
    [1414857165879849301, 14658269128098109407, 30327197456865],
    [13819438220812375094, 3642436268910286110, 21188205082231],
    [6073063033888264440, 3783099432964819560, 6454514864836],
    [6828883869150720294, 9497579866027539637, 9950184053046],
    [4548265621068768345, 3395179445046271360, 10648321926878],
    [10422524923581371874, 5938502732309497275, 22240314075544],
    [1858996082510682634, 5793671185917606254, 29664048207584],
    [890276727450878316, 889272970253526587, 26714465891296],
    [3886008133802710905, 8594177504370135500, 23398399764570],
    [612074409233016757, 7374354721120724711, 2494800386918],
    [3927020336901729264, 14764532643665507566, 2494],
    [5298603480094474942, 46020944252475, 0],
    [17418383752590430025, 46020, 0],
    [1, 0, 813292322816],
    [8973799690601597929, 5392404173658087694, 7801269781293],
    [1343055462055792431, 4976586473237854315, 3411342007929],
    [17425118728683169659, 6308932742419013568, 8755261934931],
    [18389781726026675967, 4831846642430703058, 12902983344691],
    [272526939565961561, 18139507855949846900, 5607263777382],
    [11293026845930963228, 4865833876326628409, 31857775023591],
    [13997416438903902597, 14296661839130179260, 4515501702257],
    [6186605805999441184, 9254773150378118247, 32221659992483],
    [4401776373281836138, 12174712433727875142, 28225038253533],
    [16338917089754547008, 705653145340915198, 31346962984513],
    [13337700757935003056, 17763928858962481811, 20018215910002],
    [14612496890816348693, 3982836567612046295, 9628690140722],
    [3219935399907691719, 12730849277561967738, 12376938620316],
    [10887238730052330387, 17314488764367235907, 26214864728152],
    [360256418697768294, 15951418930590301118, 23333389952614],
    [321440824631118565, 7193356087283467260, 27784953715493],
    [10069228080701402580, 17592945625696089445, 32243192687752],
    [9428069607611622975, 3554461664875361427, 30510120009203],
    [14736799017468812344, 2213779057785318207, 15769210386222],
    [10875332567307979280, 3880940796082421147, 11669245476249],
    [4611492910339012807, 4528237545358141042, 19308633238933],
    [10743508637597314786, 11681196539088147362, 12940533156716],
    [9356196315668016028, 9835005502912643016, 13440269103756],
    [15755598617722189347, 4964088126040986695, 974181905536],
    [1275276394173375542, 3355564873147047621, 12062100456398],
    [12644999363867216251, 1853093467828272926, 21097799888670],
    [4553830511509832021, 14755341584803008676, 20583254872681],
    [8869400642218174412, 4701571132542556620, 3159332245607],
    [16570849151159054040, 6128849686644853850, 30532651977815],
    [16127119334101797673, 12026867901170202093, 26198970890052],
    [9686867250420930550, 17909760324981426302, 19686157084246],
    [10678226869774428035, 2897692901883393663, 163499238],
    [7767227962910162068, 3016028602530220424, 0],
    [9780840471948993674, 3016028602, 0],
    [1, 0, 19157668069376],
    [6288709332106746357, 12323704802554838153, 17680386837205],
    [9066785620141948673, 7135886931147821731, 22413831652624],
    [8442375916704414909, 15341283120292884946, 17166167660429],
    [11604629218100425803, 3092789040392634165, 31676477686542],
    [3877248044010875762, 8811761390822097864, 17286914571196],
    [16435137704395217283, 16870860798610218168, 18023946077062],
    [14994442577577813271, 17452041453591904832, 111559165543],
    [4410105917142436089, 10314783684009874907, 10485267398767],
    [4632574728444936970, 4932636630789274902, 2506983581941],
    [9117147535650050359, 18143884346082124479, 30342153046474],
    [588939301256904809, 2823209155405527321, 14149877954182],
    [324393982565305683, 16195396106620226250, 12461062371141],
    [9380909186923521175, 1150544491807648943, 28745421074605],
    [4463385697777230217, 7767455475523884823, 23902824230985],
    [16378985502426333808, 15204378045683991807, 25555934567774],
    [18210894922387834354, 17239732561718805621, 29734698574803],
    [1555748035329493205, 12886430624522800061, 12627984577574],
    [4277055533891898507, 18162250541178258135, 7864923140435],
    [11574429772510874408, 17028935366700158083, 13787871452856],
    [17391099253493808815, 16075467823964198636, 16087531468251],
    [5791212393959129882, 9803858825574498303, 8731946729175],
    [11254268231455680880, 17464070808143041816, 2172958581275],
    [16355477587312235322, 17682703471239266775, 17635983788156],
    [2411485149249320633, 18147688354161351335, 11921361224931],
    [12763114642070638360, 6663423873348080050, 6583510511249],
    [1147543073987366419, 9417270363716235132, 19653503883703],
    [8410777835225272692, 9295013721571344178, 16703336074437],
    [8134725822306818018, 6199479138350037782, 21774048117055],
    [8899607004752328377, 887603005365085687, 9960018105614],
    [690976506652396830, 333989628642975695, 30860250490600],
    [12281570945595192074, 4620735991403939438, 10294673209484],
    [12592957291365552899, 12418523063962801200, 10715086071862],
    [13595807339013970272, 1587745622680169418, 10715],
    [9698096389749839992, 197658450495420, 0],
    [8310173728816391804, 197658, 0],
];

pub(crate) const TABLE_SIZE_2: usize = 68;
pub(crate) const ADDITIONAL_BITS_2: u32 = 120;

pub(crate) static MIN_BLOCK_2: [u8; TABLE_SIZE_2] = [
    0, 0, 0, 0, 0, 0, 1, 1, 2, 3, 3, 4,
    4, 5, 5, 6, 6, 7, 7, 8, 8, 9, 10, 10,
    11, 11, 12, 12, 13, 13, 14, 14, 15, 15, 16, 16,
    17, 18, 18, 19, 19, 20, 20, 21, 21, 22, 22, 23,
    23, 24, 24, 25, 26, 26, 27, 27, 28, 28, 29, 29,
    30, 30, 31, 31, 32, 33, 33, 34,
];

pub(crate) static POW10_OFFSET_2: [u16; TABLE_SIZE_2 + 1] = [
    0, 2, 6, 12, 20, 29, 40, 52, 66, 80, 95, 112,
    130, 150, 170, 192, 215, 240, 265, 292, 320, 350, 381, 412,
    445, 479, 515, 551, 589, 628, 669, 711, 754, 798, 844, 891,
    939, 988, 1038, 1090, 1143, 1197, 1252, 1309, 1367, 1426, 1486, 1548,
    1611, 1676, 1741, 1808, 1876, 1945, 2015, 2086, 2159, 2233, 2309, 2385,
    2463, 2542, 2623, 2704, 2787, 2871, 2956, 3043, 3130,
];

pub(crate) static POW10_SPLIT_2: [[u64; 3]; 3130] = [
    [1, 0, 3906250],
    [1, 0, 6858000000000],
    [1, 11153727427136454656, 59],
    [1, 7205759403792793600, 59604644775],
    [1, 0, 13223390625000],
    [1, 0, 15592000000000],
    [1, 16777216000000000, 0],
    [1, 12945425605062557696, 909494],
    [1, 4388757836872548352, 24758701772928],
    [1, 1152921504606846976, 20608237915039],
    [1, 0, 19359062500000],
    [1, 0, 8864000000000],
    [1, 256000000000, 0],
    [1, 16192327041775828992, 13],
    [1, 15024075324038053888, 13877787807],
    [1, 5449091666327633920, 15519814456755],
    [1, 2494994193563254784, 5555295395851],
    [1, 4611686018427387904, 8203135253906],
    [1, 0, 32146250000000],
    [1, 0, 26240000000000],
    [1, 3906250, 0],
    [1, 3906250000000000, 0],
    [1, 4368439412768899072, 211758],
    [1, 1563676642168012800, 15150236813575],
    [1, 11532349341402398720, 18695084767080],
    [1, 9048364970084925440, 30568625169910],
    [1, 16609275425742389248, 26102490512847],
    [1, 0, 15823900390625],
    [1, 0, 13537000000000],
    [11153727427136454657, 59, 0],
    [7205759403792793601, 59604644775, 0],
    [1, 4264412554261970152, 3],
    [1, 14485570586272534528, 3231174267],
    [1, 17827675094632103936, 20091785264354],
    [1, 7347197909193981952, 15586966440203],
    [1, 13677404030777688064, 2315398292396],
    [1, 3810326759732150272, 9132741453558],
    [1, 9943947977234055168, 26358206558227],
    [1, 0, 28691539062500],
    [1, 0, 28388000000000],
    [12945425605062557697, 909494, 0],
    [4388757836872548353, 909494701772928, 0],
    [1152921504606846977, 14878706826214591391, 49303],
    [1, 4387341015746028192, 16535806576313],
    [1, 651726680428265472, 1721237838233],
    [1, 2570638187944738816, 6553035330174],
    [1, 7419175577111756800, 21118139354575],
    [1, 17299322326264840192, 19919402194313],
    [1, 7990511638862102528, 21897937798142],
    [1, 16717361816799281152, 17406433166503],
    [1, 0, 1191906250000],
    [1, 0, 3344000000000],
    [16192327041775828993, 13, 0],
    [15024075324038053889, 13877787807, 0],
    [5449091666327633921, 13877787807814456755, 0],
    [2494994193563254785, 9707857417284919307, 752316384],
    [4611686018427387905, 1844515466944871826, 28640526264005],
    [1, 15167599819856275072, 26309099991383],
    [1, 14830185305589481472, 12631822237233],
    [1, 6163721531743535104, 32305803945956],
    [1, 14122847407012052992, 26596334136013],
    [1, 335491783960035328, 27341765601092],
    [1, 941252322120433664, 26436018187046],
    [1, 11529215046068469760, 11046051025390],
    [1, 0, 4590625000000],
    [1, 0, 2624000000000],
    [4368439412768899073, 211758, 0],
    [1563676642168012801, 211758236813575, 0],
    [11532349341402398721, 8061591463141767016, 11479],
    [9048364970084925441, 16628725344207857142, 11479437019748],
    [16609275425742389249, 3555541870038531535, 2660901445007],
    [1, 18316647450161853665, 23951192746310],
    [1, 16709574568378075648, 26950992947447],
    [1, 7696022835795591168, 26871905827852],
    [1, 16664449640376041472, 15372417202233],
    [1, 3109186955116544000, 30777903381625],
    [1, 10515518101817131008, 31865168549362],
    [1, 9961962375743537152, 22002570047378],
    [1, 9223372036854775808, 12178540039062],
    [1, 0, 2966500000000],
    [14485570586272534529, 3231174267, 0],
    [17827675094632103937, 3231174267785264354, 0],
    [7347197909193981953, 748977172262750475, 175162308],
    [13677404030777688065, 15965033457315095468, 17348040602133],
    [3810326759732150273, 16809402149066729206, 12821865466197],
    [9943947977234055169, 7563769067065700371, 2389911239516],
    [1, 13550322810840051428, 31580410032742],
    [1, 8663209637545764864, 12902734564471],
    [1, 8969247575312957440, 3191469633535],
    [1, 6193172891660451840, 28671486223885],
    [1, 3427954273864908800, 26125335732575],
    [1, 10058367555266936832, 8543185829773],
    [1, 13907115649320091648, 32653545265197],
    [1, 0, 22573753906250],
    [1, 0, 13386000000000],
    [14878706826214591392, 49303, 0],
    [4387341015746028193, 49303806576313, 0],
    [651726680428265473, 14106411361315920281, 2672],
    [2570638187944738817, 3609034283485221502, 2672764710092],
    [7419175577111756801, 9896072247338192335, 27852195646140],
    [17299322326264840193, 8889095178479228297, 19132536467151],
    [7990511638862102529, 3631796911038383102, 11983481878815],
    [16717361816799281153, 898318840772166823, 14623196880105],
    [1, 17293677953982795024, 7401048697961],
    [1, 7353628266884669440, 27753937492160],
    [1, 2404693032470315008, 22720398640987],
    [1, 9191155893041889280, 18267130358670],
    [1, 6353946855033798656, 27534498253559],
    [1, 3767824038248841216, 19191344448149],
    [1, 7205759403792793600, 17045204254150],
    [1, 0, 15814390625000],
    [1, 0, 13032000000000],
    [9707857417284919308, 752316384, 0],
    [1844515466944871827, 752316384526264005, 0],
    [15167599819856275073, 17063068157692817751, 40783152],
    [14830185305589481473, 5385330256507239985, 19760924990778],
    [6163721531743535105, 3373050282752075748, 7482291939338],
    [14122847407012052993, 4116064001262906061, 26634182853422],
    [335491783960035329, 11306582046748043076, 814223132276],
    [941252322120433665, 17035410946089626406, 1652612931040],
    [11529215046068469761, 15618595715183448558, 7648923491477],
    [1, 5141740092277295680, 7317846685770],
    [1, 16973644291514990592, 30794278734288],
    [1, 14625255268443750400, 2512920143100],
    [1, 14021170507320131584, 25852792836676],
    [1, 4451355232865091584, 4676760089176],
    [1, 12891553933348044800, 12888241308450],
    [1, 1152921504606846976, 802698852539],
    [1, 0, 30907062500000],
    [1, 0, 15008000000000],
    [8061591463141767017, 11479, 0],
    [16628725344207857143, 11479437019748, 0],
    [3555541870038531536, 5562205901560339855, 622],
    [18316647450161853666, 2106077949367544134, 622301527786],
    [16709574568378075649, 7496855998374373623, 16106114170714],
    [7696022835795591169, 229183437194837004, 16218406405378],
    [16664449640376041473, 465169186276472889, 17666012424059],
    [3109186955116544001, 2152980561625316473, 10107025216872],
    [10515518101817131009, 2059790725449340402, 21864116713310],
    [9961962375743537153, 17891190926410198930, 30558111661478],
    [9223372036854775809, 9930696175609809814, 32166969883403],
    [1, 7276914261609005312, 15115538344118],
    [1, 10539762974036983808, 10422394482312],
    [1, 12851089458992250880, 28296571361695],
    [1, 9449311677678878720, 6559696658955],
    [1, 8699564697382289408, 8715512248212],
    [1, 4224376450473525248, 30612471604347],
    [1, 4611686018427387904, 25723229003906],
    [1, 0, 24706250000000],
    [1, 0, 18048000000000],
    [748977172262750476, 175162308, 0],
    [15965033457315095469, 175162308040602133, 0],
    [16809402149066729207, 13756840147955779925, 9495567],
    [7563769067065700372, 13788447602092505948, 25615745759798],
    [13550322810840051429, 4972540435632173670, 14902747473242],
    [8663209637545764865, 2844874687533091959, 9562269561957],
    [8969247575312957441, 15377573779532804095, 13413154220965],
    [6193172891660451841, 17824715805091194381, 27557833619944],
    [3427954273864908801, 18277569135638159711, 14824966279779],
    [10058367555266936833, 4254645803379752845, 21091990829008],
    [13907115649320091649, 2933643244178200621, 30672230644811],
    [1, 17188148801879487562, 31819159033118],
    [1, 11069762501163246592, 21790931771413],
    [1, 11676570643941818368, 24597600093027],
    [1, 17840016768744030208, 17251632988162],
    [1, 16463817321652158464, 16386967109246],
    [1, 6954191143357644800, 32382892505325],
    [1, 5080060379673919488, 30957376987457],
    [1, 0, 24897275390625],
    [1, 0, 27297000000000],
    [14106411361315920282, 2672, 0],
    [3609034283485221503, 2672764710092, 0],
    [9896072247338192336, 16433563478020213436, 144],
    [8889095178479228298, 4194750497955655375, 144890865261],
    [3631796911038383103, 2691539602252904735, 9837227397880],
    [898318840772166824, 3775467271962795241, 21240145908654],
    [17293677953982795025, 16980212613224918121, 5038204668490],
    [7353628266884669441, 4172857038337333440, 19018920499170],
    [2404693032470315009, 5936867627376461659, 6114226211033],
    [9191155893041889281, 17856837443266866062, 2265321838238],
    [6353946855033798657, 8956297047799810807, 5790968021097],
    [3767824038248841217, 15356974049716912789, 105485521835],
    [7205759403792793601, 6923608913322982854, 21419832503231],
    [1, 4855902993563955944, 27583375329591],
    [1, 13835893222288330752, 18743263239028],
    [1, 9114973913760137216, 7028750045274],
    [1, 17937099003422310400, 20570494123725],
    [1, 7007960010734960640, 16077972372085],
    [1, 7683422439270776832, 31349379902273],
    [1, 720575940379279360, 11073416519165],
    [1, 0, 24061039062500],
    [1, 0, 11748000000000],
    [17063068157692817752, 40783152, 0],
    [5385330256507239986, 40783152924990778, 0],
    [3373050282752075749, 2768933352715741194, 2210859],
    [4116064001262906062, 15201941611824153390, 15403150104177],
    [11306582046748043077, 1418128541727000180, 22129824098906],
    [17035410946089626407, 5353350204565757408, 27226076876902],
    [15618595715183448559, 1721001680354286741, 4198290205696],
    [5141740092277295681, 637631411660453962, 11264093295688],
    [16973644291514990593, 1630012588870568400, 5192034566068],
    [14625255268443750401, 9253063571656828156, 16308088363159],
    [14021170507320131585, 6029146854993203780, 22679501609581],
    [4451355232865091585, 16987401965352759896, 6765326840705],
    [12891553933348044801, 14499131620542087970, 13185920888905],
    [1152921504606846977, 1978417255298660539, 28745785999500],
    [1, 5790079354402454176, 140107250214],
    [1, 13748918935842078720, 31270313880830],
    [1, 18047438014740692992, 27902745330388],
    [1, 3116889656839372800, 17108978353575],
    [1, 15995952446606147584, 17831168966926],
    [1, 12530140063251562496, 270867142319],
    [1, 16717361816799281152, 5807679260253],
    [1, 0, 18013906250000],
    [1, 0, 10512000000000],
    [5562205901560339856, 622, 0],
    [2106077949367544135, 622301527786, 0],
    [7496855998374373624, 13558973353698967386, 33],
    [229183437194837005, 6228991722850501890, 33735033418],
    [465169186276472890, 16886831391703377787, 16970337674317],
    [2152980561625316474, 1181713637872883048, 25677915436964],
    [2059790725449340403, 12393932434925221726, 14244064060824],
    [17891190926410198931, 10684799845419711910, 26008671876423],
    [9930696175609809815, 4590318792215640843, 30023579224160],
    [7276914261609005313, 6383712187366189238, 18528248841680],
    [10539762974036983809, 1904270214927675016, 17872346061731],
    [12851089458992250881, 3711506775113308575, 7075103230695],
    [9449311677678878721, 8091219444738793995, 19175201201185],
    [8699564697382289409, 39436684991068052, 23585438625885],
    [4224376450473525249, 18025182908196512891, 28765002137866],
    [4611686018427387905, 7853924592034603138, 266977147123],
    [1, 4815749283615688320, 30963425762105],
    [1, 14242399906544287744, 23353261062291],
    [1, 76242322576113664, 30867772082046],
    [1, 10858088421377703936, 1918004133104],
    [1, 14293835879041466368, 31984588618152],
    [1, 12182236992037191680, 31144774870395],
    [1, 11529215046068469760, 9595660400390],
    [1, 0, 30470625000000],
    [1, 0, 31296000000000],
    [13756840147955779926, 9495567, 0],
    [13788447602092505949, 9495567745759798, 0],
    [4972540435632173671, 14000097438505379162, 514755],
    [2844874687533091960, 16451062686452429925, 23235758946802],
    [15377573779532804096, 4009347599785716645, 31218891813895],
    [17824715805091194382, 16544162347546196456, 29703217347168],
    [18277569135638159712, 17674258299745817187, 31328896860837],
    [4254645803379752846, 5215238411201214416, 17061958123462],
    [2933643244178200622, 14253990228345322571, 32710282718640],
    [17188148801879487563, 11214836553940194590, 11696772710358],
    [11069762501163246593, 14620711348380590101, 32726607957507],
    [11676570643941818369, 6638710787931587427, 3587792590350],
    [17840016768744030209, 17320000343692853250, 22030359885232],
    [16463817321652158465, 75147386268843646, 30128938919100],
    [6954191143357644801, 17938801582125480173, 9404004073747],
    [5080060379673919489, 6573358613626446145, 275972464382],
    [1, 8688505427903736481, 7934356342484],
    [1, 539870168696556032, 18132471004823],
    [1, 9002861336394465280, 16023029266420],
    [1, 17989846818158018560, 14324488046090],
    [1, 2700938287723315200, 1546975231550],
    [1, 17800090499088908288, 15934146418157],
    [1, 8809040871136690176, 5613964944839],
    [1, 9223372036854775808, 26055477539062],
    [1, 0, 12534500000000],
    [16433563478020213437, 144, 0],
    [4194750497955655376, 144890865261, 0],
    [2691539602252904736, 15763656745260536568, 7],
    [3775467271962795242, 8787336846248645550, 7854549544],
    [16980212613224918122, 17584084447880694346, 27176476362484],
    [4172857038337333441, 18041672551129683938, 18164953235127],
    [5936867627376461660, 14025886302294509785, 16055978041028],
    [17856837443266866063, 18430498103283160734, 7876760344819],
    [8956297047799810808, 3292348826238025833, 6387999119304],
    [15356974049716912790, 9211721212658275243, 6088178478587],
    [6923608913322982855, 10233245872666307519, 11771499368407],
    [4855902993563955945, 6200995035623311671, 20439554745370],
    [13835893222288330753, 8480542380570450804, 25626336156614],
    [9114973913760137217, 11870363864499900506, 23494459731123],
    [17937099003422310401, 9301051379839581901, 11443643493714],
    [7007960010734960641, 11456694803569638005, 11602504211005],
    [7683422439270776833, 14327208890643983169, 23101621068669],
    [720575940379279361, 4510081789599866365, 25469776679550],
    [1, 13255356976020303332, 21118244492023],
    [1, 9658806854127314944, 4855718574341],
    [1, 13708435528809971712, 30981523604968],
    [1, 1580190652103131136, 1512743135779],
    [1, 16557336970347413504, 27171085662306],
    [1, 12751520132434493440, 14434897575035],
    [1, 9295429630892703744, 15483691261291],
    [1, 0, 23915503906250],
    [1, 0, 28106000000000],
    [2768933352715741195, 2210859, 0],
    [15201941611824153391, 2210859150104177, 0],
    [1418128541727000181, 16872870088062921306, 119850],
    [5353350204565757409, 5112979788807802982, 21546914680120],
    [1721001680354286742, 13742728082020150272, 3384277175189],
    [637631411660453963, 2217110934613627976, 2965744994782],
    [1630012588870568401, 11021433940188610484, 18910120189824],
    [9253063571656828157, 1713669895470733463, 8064597473131],
    [6029146854993203781, 3313382510572018285, 14187092898231],
    [16987401965352759897, 14976595232784069505, 29111179618825],
    [14499131620542087971, 7213172372862496841, 10761811882854],
    [1978417255298660540, 15836474542502248588, 29542391026857],
    [5790079354402454177, 3221099285878340134, 5289858497005],
    [13748918935842078721, 3265814602578095358, 31213174616142],
    [18047438014740692993, 6502528252282225364, 28750177040164],
    [3116889656839372801, 16392476834556790183, 30500352502762],
    [15995952446606147585, 15167629413417091342, 11242888637949],
    [12530140063251562497, 1366763272626280111, 11773822238838],
    [16717361816799281153, 8720523635169216093, 118074092385],
    [1, 9649171375767398672, 11105472740533],
    [1, 7647980704001073152, 31925523082628],
    [1, 13286434495608651776, 28036414597864],
    [1, 4358271637167013888, 27368720259057],
    [1, 15954987941890097152, 22513236262378],
    [1, 7911135695429697536, 15850864921629],
    [1, 7205759403792793600, 19485428863525],
    [1, 0, 21029390625000],
    [1, 0, 10472000000000],
    [13558973353698967387, 33, 0],
    [6228991722850501891, 33735033418, 0],
    [16886831391703377788, 15288289344628122701, 1],
    [1181713637872883049, 952589339068938148, 1828779826],
    [12393932434925221727, 10058155040190817688, 30514051639971],
    [10684799845419711911, 5322725640026584391, 27299545253677],
    [4590318792215640844, 2269982385930389600, 1837288545535],
    [6383712187366189239, 13216683679976310224, 23807123055991],
    [1904270214927675017, 17417440642083494819, 25975716477857],
    [3711506775113308576, 3029180749090900711, 31649944201349],
    [8091219444738793996, 8315443826261908513, 26757164212217],
    [39436684991068053, 1488962797247197277, 8185450781113],
    [18025182908196512892, 18009099634999034122, 22969080716834],
    [7853924592034603139, 8092455412807497971, 7714976275247],
    [4815749283615688321, 17808458047236758329, 6959438692886],
    [14242399906544287745, 3164591817527425171, 534965398445],
    [76242322576113665, 3314036340472350590, 11181171552866],
    [10858088421377703937, 33234902404332784, 12898179654270],
    [14293835879041466369, 12349284717857274280, 8830001801667],
    [12182236992037191681, 18209607903013119355, 27075669456065],
    [11529215046068469761, 7891549145984268038, 29889987144822],
    [1, 7703609897518594624, 27766427801736],
    [1, 6336912652634587136, 22664417613529],
    [1, 4461621834659397632, 5849343524723],
    [1, 5484660635557953536, 32627241865004],
    [1, 15142619273265938432, 20268297324048],
    [1, 12170977992968765440, 1552820883035],
    [1, 1152921504606846976, 20059659790039],
    [1, 0, 26327062500000],
    [1, 0, 21152000000000],
    [14000097438505379163, 514755, 0],
    [16451062686452429926, 514755758946802, 0],
    [4009347599785716646, 17812314011563521031, 27904],
    [16544162347546196457, 7684138864490314336, 27904965607477],
    [17674258299745817188, 9740522787420029605, 53416558002],
    [5215238411201214417, 6701109407732989894, 32178528034798],
    [14253990228345322572, 16534886227502443952, 8174363267868],
    [11214836553940194591, 8908667306968317910, 21276896357978],
    [14620711348380590102, 7531472173477105155, 28250482939822],
    [6638710787931587428, 11527371604834801166, 6062408281924],
    [17320000343692853251, 15688593496691078576, 12100624900066],
    [75147386268843647, 11394944804253312188, 24546850480357],
    [17938801582125480174, 11182279880854372627, 8421617721195],
    [6573358613626446146, 150579373068361470, 24427606192607],
    [8688505427903736482, 3147220002440857300, 12767008162924],
    [539870168696556033, 3630514817795505815, 1132170611138],
    [9002861336394465281, 11708796588334233588, 2498196810602],
    [17989846818158018561, 16844495466426369546, 11114634735134],
    [2700938287723315201, 17636655472325475902, 28190913141928],
    [17800090499088908289, 17038926655686645229, 7336956085008],
    [8809040871136690177, 15602838456783529415, 17168923682064],
    [9223372036854775809, 10869815869248876790, 25872845831567],
    [1, 18407124180939800832, 32143589253898],
    [1, 5705018517251293184, 8970997852201],
    [1, 9660452258743058432, 26665309269673],
    [1, 5646292272224927744, 28329523694166],
    [1, 7410409304047484928, 19030306086117],
    [1, 5953758707383795712, 23781401719093],
    [1, 4611686018427387904, 28981322753906],
    [1, 0, 10098250000000],
    [1, 0, 9856000000000],
    [8787336846248645551, 7854549544, 0],
    [17584084447880694347, 7854549544476362484, 0],
    [18041672551129683939, 15035424419724983, 425795984],
    [14025886302294509786, 18280822466032836292, 8592000815071],
    [18430498103283160735, 11524250747302615283, 4063991005371],
    [3292348826238025834, 15212285943691810760, 187624730884],
    [9211721212658275244, 7951804027551297019, 12548824659673],
    [10233245872666307520, 1706416229965221847, 30425431068160],
    [6200995035623311672, 3406023111930700826, 19968092505009],
    [8480542380570450805, 16132696204133391302, 945184640882],
    [11870363864499900507, 11593846688794356915, 3954874555213],
    [9301051379839581902, 6875759884161133906, 6989628503688],
    [11456694803569638006, 3593593325323835965, 30344372735690],
    [14327208890643983170, 9542049733257388925, 20170194809084],
    [4510081789599866366, 9926551925937787518, 28924517275552],
    [13255356976020303333, 3128491553219547895, 22432538119458],
    [9658806854127314945, 17158408656931354885, 19746169595866],
    [13708435528809971713, 2065169543154992616, 10202930159197],
    [1580190652103131137, 4832622393556232739, 7773111953065],
    [16557336970347413505, 16505930714733656162, 9897261976984],
    [12751520132434493441, 18270988073492888699, 19864894788296],
    [9295429630892703745, 2525111411519708523, 21192990472248],
    [1, 16728989342518570442, 14392136886563],
    [1, 7974052022039438336, 26915906880329],
    [1, 5356554962386550784, 841432274226],
    [1, 6693869495028547584, 5426290379426],
    [1, 8157517147199766528, 19106362875392],
    [1, 12065776720423157760, 24064442219890],
    [1, 11997589407315001344, 15730654087066],
    [1, 0, 1946650390625],
    [1, 0, 12385000000000],
    [16872870088062921307, 119850, 0],
    [5112979788807802983, 119850914680120, 0],
    [13742728082020150273, 2418433229320326037, 6497],
    [2217110934613627977, 1143911773589293534, 6497131103528],
    [11021433940188610485, 9276183703610924928, 1320062011581],
    [1713669895470733464, 3532180128827684715, 18621502862926],
    [3313382510572018286, 8563997501322031543, 13902191479868],
    [14976595232784069506, 14843890409658460681, 19516464255234],
    [7213172372862496842, 9489417861634552678, 20738804688911],
    [15836474542502248589, 1113198223322322089, 10255514422373],
    [3221099285878340135, 11190777557146597869, 19557060346596],
    [3265814602578095359, 17764553645932638286, 740606653266],
    [6502528252282225365, 14900777150991234852, 13138963018382],
    [16392476834556790184, 17364899863357893610, 12942807772747],
    [15167629413417091343, 15537570181590167037, 11851941353107],
    [1366763272626280112, 5558052627121307766, 5779842293367],
    [8720523635169216094, 12095241565795232609, 24183301302636],
    [9649171375767398673, 2187936505958366389, 26988655684359],
    [7647980704001073153, 12009203621325860228, 11015118608275],
    [13286434495608651777, 14814842834750302952, 22419651020232],
    [4358271637167013889, 5965296499605198833, 17864803114239],
    [15954987941890097153, 4051026394962148842, 23807323379371],
    [7911135695429697537, 16799526299141688349, 5803219606580],
    [7205759403792793601, 9460214166646215205, 23604910704145],
    [1, 10750736995029068008, 17937512839237],
    [1, 5377963045376430080, 14405582798620],
    [1, 15996910350253424640, 16156291539960],
    [1, 13651157529655246848, 9208867194247],
    [1, 9771305410219737088, 1415740030732],
    [1, 12709439623416250368, 32524529703527],
    [1, 9943947977234055168, 6759688980102],
    [1, 0, 18054539062500],
    [1, 0, 11492000000000],
    [952589339068938149, 1828779826, 0],
    [10058155040190817689, 1828779826051639971, 0],
    [5322725640026584392, 371564423966525229, 99138353],
    [2269982385930389601, 14464859121514339583, 15153020142547],
    [13216683679976310225, 3913119023023056247, 979784141584],
    [17417440642083494820, 5493396321716566945, 2832212130607],
    [3029180749090900712, 5837454566818211973, 31535297797611],
    [8315443826261908514, 2886670683193253881, 7659316449046],
    [1488962797247197278, 5504823105587173817, 3862156486731],
    [18009099634999034123, 9431834277334851106, 10315298417058],
    [8092455412807497972, 12921661346456247087, 10658511300760],
    [17808458047236758330, 3643076516404724246, 10392700484665],
    [3164591817527425172, 12559396953196866477, 31801197491573],
    [3314036340472350591, 1626880974916825698, 30069680846273],
    [33234902404332785, 6806994170946429566, 13761088193394],
    [12349284717857274281, 7596631230206896579, 882369007893],
    [18209607903013119356, 3100480253729502401, 4373411814204],
    [7891549145984268039, 6310570748781063286, 23356168077371],
    [7703609897518594625, 14251867077375744136, 59342096725],
    [6336912652634587137, 6701165793751570137, 2389772595262],
    [4461621834659397633, 10856833140463959923, 28734363270925],
    [5484660635557953537, 15867563727561248556, 32525588550103],
    [15142619273265938433, 5048961008671491600, 20951860182353],
    [12170977992968765441, 13278183119599849051, 32081273704724],
    [1152921504606846977, 4547591784941053655, 20756719811749],
    [1, 11815437715887182496, 15525246525444],
    [1, 398495392178782208, 24580640516162],
    [1, 9154841240825495552, 10306021602478],
    [1, 1902683298245640192, 13486496284938],
    [1, 5081900962138816512, 266103144668],
    [1, 3234710432358858752, 16604275490403],
    [1, 16717361816799281152, 15971175354003],
    [1, 0, 20115906250000],
    [1, 0, 17680000000000],
    [17812314011563521032, 27904, 0],
    [7684138864490314337, 27904965607477, 0],
    [9740522787420029606, 13488568028574514610, 1512],
    [6701109407732989895, 275784718433886190, 1512731216738],
    [16534886227502443953, 10020568880357102364, 2914014950319],
    [8908667306968317911, 8876397213146246746, 29615543216127],
    [7531472173477105156, 2155905919114811310, 26623481190457],
    [11527371604834801167, 1087100407155601220, 6201116871894],
    [15688593496691078577, 2903498381705011170, 19670058931831],
    [11394944804253312189, 12223476257006657765, 5751157398962],
    [11182279880854372628, 12148657163736735595, 7602662635975],
    [150579373068361471, 8951241323311673823, 31175658580024],
    [3147220002440857301, 8463862715901576300, 10296485247764],
    [3630514817795505816, 3873401978748963266, 31508458826917],
    [11708796588334233589, 248364795947002730, 27813209977542],
    [16844495466426369547, 10454378025404001822, 12998013463882],
    [17636655472325475903, 6574176865628265640, 11594566732968],
    [17038926655686645230, 16703315293848336, 3240356386842],
    [15602838456783529416, 9896033222450013456, 6170000905488],
    [10869815869248876791, 17311376269334085007, 21776536465035],
    [18407124180939800833, 18378511316495639306, 28299938451587],
    [5705018517251293185, 15120796393727584297, 20611996301094],
    [9660452258743058433, 18253447805740347049, 14118819700014],
    [5646292272224927745, 5842497225601731158, 7470989521388],
    [7410409304047484929, 4369968404176723173, 12780316722409],
    [5953758707383795713, 16142207253674488117, 1257236896461],
    [4611686018427387905, 12124259227391928178, 6861875070808],
    [1, 13019483264566077056, 18264657257409],
    [1, 74901376448135168, 25537705787602],
    [1, 13897060093813325824, 16594004060411],
    [1, 4495486210810052608, 10491753361137],
    [1, 14885496280087265280, 28401243700795],
    [1, 4976477588244398080, 15931806944370],
    [1, 11529215046068469760, 3186269775390],
    [1, 0, 26142625000000],
    [1, 0, 27200000000000],
    [15035424419724984, 425795984, 0],
    [18280822466032836293, 425795984000815071, 0],
    [11524250747302615284, 10043594327130472635, 23082446],
    [15212285943691810761, 8336034337032909060, 13774544464339],
    [7951804027551297020, 16717215784895280857, 27091451897326],
    [1706416229965221848, 10968831263951212032, 26094906242083],
    [3406023111930700827, 5536629379734406065, 29731594621534],
    [16132696204133391303, 1618806894932332402, 21086300141280],
    [11593846688794356916, 11363331325254998861, 30432087755697],
    [6875759884161133907, 8775167772751754888, 19377616007425],
    [3593593325323835966, 2898202945316114122, 12545475702798],
    [9542049733257388926, 8868842714495185148, 28686157111896],
    [9926551925937787519, 17052094667531999136, 25176480780926],
    [3128491553219547896, 3658615537031138594, 4734924395904],
    [17158408656931354886, 12486952437987190746, 5504198333945],
    [2065169543154992617, 912079238520577629, 22009676919048],
    [4832622393556232740, 10960072898031888041, 28936049443914],
    [16505930714733656163, 6129550094334741912, 17482594146742],
    [18270988073492888700, 7965724516573729480, 22966332283576],
    [2525111411519708524, 5801761178810791992, 23224431822791],
    [16728989342518570443, 13197466483098446115, 18375314514103],
    [7974052022039438337, 11326268638393107273, 8375715436091],
    [5356554962386550785, 3597339351794947378, 5691613998253],
    [6693869495028547585, 353880726151383714, 27821195012157],
    [8157517147199766529, 11154818162602073600, 10301019183912],
    [12065776720423157761, 5141043976157511026, 23336604703904],
    [11997589407315001345, 7188225141808859034, 7328278696552],
    [1, 13894168943295705185, 21096389674465],
    [1, 12176538069834828288, 1505753204407],
    [1, 7994239409235165184, 1719660091451],
    [1, 13707777025480065024, 6203433368586],
    [1, 10120227247676719104, 15370743100081],
    [1, 7358494763030413312, 12977548618618],
    [1, 7656119366529843200, 27514398904800],
    [1, 9223372036854775808, 4576415039062],
    [1, 0, 15958500000000],
    [2418433229320326038, 6497, 0],
    [1143911773589293535, 6497131103528, 0],
    [9276183703610924929, 3877189582299842749, 352],
    [3532180128827684716, 7625565791857948238, 352210182868],
    [8563997501322031544, 16568435163612007484, 25300413382749],
    [14843890409658460682, 17592071940521808130, 93898176669],
    [9489417861634552679, 15158637878035490831, 30877953668130],
    [1113198223322322090, 17789243229146401893, 13346821751405],
    [11190777557146597870, 14677686051252896484, 17005964356807],
    [17764553645932638287, 3531237481269211986, 27847795678955],
    [14900777150991234853, 8074435404989280910, 7915191428767],
    [17364899863357893611, 7086549341467684427, 26271437716020],
    [15537570181590167038, 10556134770918626963, 31284384162609],
    [5558052627121307767, 10772666134712966775, 25393572249212],
    [12095241565795232610, 6195173298198112620, 32380583987401],
    [2187936505958366390, 8144773843324250887, 18633335841017],
    [12009203621325860229, 14144284817150924691, 8441441529074],
    [14814842834750302953, 6464447844648863176, 11506766763216],
    [5965296499605198834, 15760468443293179135, 21712350438419],
    [4051026394962148843, 5172191224908322475, 25619854376706],
    [16799526299141688350, 2357554307308969012, 16130280385048],
    [9460214166646215206, 1602046917604361745, 27160127803275],
    [10750736995029068009, 7830970218109515845, 3979086847137],
    [5377963045376430081, 2899479134887821084, 23713424517746],
    [15996910350253424641, 15792042302392017912, 10866157181078],
    [13651157529655246849, 11286099112296056199, 22678856088328],
    [9771305410219737089, 15161477829153947404, 15112611820658],
    [12709439623416250369, 423831848142641767, 29810821905360],
    [9943947977234055169, 9707413321046312582, 15312022975970],
    [1, 10969483299803835620, 13794526239930],
    [1, 4326479556120930304, 7354594656881],
    [1, 12876227232041795584, 625234538926],
    [1, 16967986827791171584, 29102698021676],
    [1, 1288146316538413056, 17196919836409],
    [1, 13715290452691779584, 20217069830551],
    [1, 4683743612465315840, 407743507385],
    [1, 0, 11193253906250],
    [1, 0, 18250000000000],
    [371564423966525230, 99138353, 0],
    [14464859121514339584, 99138353020142547, 0],
    [3913119023023056248, 16344805304534272784, 5374300],
    [5493396321716566946, 26429987091348271, 348886053671],
    [5837454566818211974, 8691371289609838059, 13095001432772],
    [2886670683193253882, 12980168378493046550, 8900471160181],
    [5504823105587173818, 14010125458129496139, 32117703656337],
    [9431834277334851107, 17061829677031795106, 17297759490422],
    [12921661346456247088, 2227928323072698520, 20854924923640],
    [3643076516404724247, 7394752319272287289, 21240120776236],
    [12559396953196866478, 8805771303577744757, 5676400870326],
    [1626880974916825699, 16371027194302248385, 950477361818],
    [6806994170946429567, 9114324123731231602, 4762887475162],
    [7596631230206896580, 14468189808746991893, 20442494088500],
    [3100480253729502402, 2376054557800684348, 13620784322141],
    [6310570748781063287, 12462238943546048571, 22109128806175],
    [14251867077375744137, 15334855370842605909, 20255675579326],
    [6701165793751570138, 7211347914013798462, 31678831304175],
    [10856833140463959924, 13763642332572548877, 7663390927953],
    [15867563727561248557, 16868268377740071383, 11345746128545],
    [5048961008671491601, 1120013377627684177, 28321914430661],
    [13278183119599849052, 15898107650717274388, 9413060716046],
    [4547591784941053656, 12281923376333274277, 26126861838142],
    [11815437715887182497, 6383530489286615044, 10046665804400],
    [398495392178782209, 4253822060257126466, 19056346051881],
    [9154841240825495553, 17614372438391501998, 13609230600155],
    [1902683298245640193, 4309951310554333450, 2011954877043],
    [5081900962138816513, 13106185988973773020, 4723233642928],
    [3234710432358858753, 2070134359761960547, 22960710487766],
    [16717361816799281153, 9399359914137865875, 3798112222208],
    [1, 17415053284723541264, 15360509540321],
    [1, 4840502610448261120, 30689944071930],
    [1, 5690599259712258048, 28410262404172],
    [1, 114769594245185536, 15436308488004],
    [1, 3150620882578178048, 8004006221672],
    [1, 5136918324969472000, 5992170795500],
    [1, 7205759403792793600, 12780278472900],
    [1, 0, 24772390625000],
    [1, 0, 7912000000000],
    [13488568028574514611, 1512, 0],
    [275784718433886191, 1512731216738, 0],
    [10020568880357102365, 98202693831717807, 82],
    [8876397213146246747, 12909287260170414079, 82005323578],
    [2155905919114811311, 11728631949380786233, 28474699813864],
    [1087100407155601221, 18263701925522197718, 5096635810411],
    [2903498381705011171, 4868886449713321591, 17003990077265],
    [12223476257006657766, 5870139507184082354, 20305263942863],
    [12148657163736735596, 5978562500822661575, 23759318220900],
    [8951241323311673824, 10821136839630268472, 100324098522],
    [8463862715901576301, 9490907630136752916, 16858586615003],
    [3873401978748963267, 10564005678001613989, 3291514503133],
    [248364795947002731, 5754050547468481222, 32733572675895],
    [10454378025404001823, 3833909949855542602, 14647311927705],
    [6574176865628265641, 15446538552665967784, 2457207836674],
    [16703315293848337, 14924837848804399130, 4098837358532],
    [9896033222450013457, 18140170340418344208, 10180809077080],
    [17311376269334085008, 11380424819825208971, 12632983380604],
    [18378511316495639307, 12416915664152252547, 8828616934065],
    [15120796393727584298, 17195282241626289958, 689673122346],
    [18253447805740347050, 2649541045825281326, 12842932158118],
    [5842497225601731159, 16577429864268509676, 16038143631907],
    [4369968404176723174, 12051257060168107241, 8739898664273],
    [16142207253674488118, 5363884561143470797, 9553653299954],
    [12124259227391928179, 13054029903083620184, 31474290776764],
    [13019483264566077057, 566314952158634945, 23228707660379],
    [74901376448135169, 1329472079642345682, 25179030699995],
    [13897060093813325825, 15686237486658857211, 16347072070825],
    [4495486210810052609, 1069073549290598129, 1193850352638],
    [14885496280087265281, 4323599065125928507, 13310057954593],
    [4976477588244398081, 17861823329752681586, 15649234382774],
    [11529215046068469761, 17220149985412802078, 28598968291382],
    [1, 4344934572159429184, 4150933506201],
    [1, 2252927464837120000, 18585235539375],
    [1, 10910018171964489728, 17839122131442],
    [1, 3597328585515335680, 10738591433270],
    [1, 6972808074239148032, 566195011573],
    [1, 2227030015734710272, 16373377996683],
    [1, 1152921504606846976, 6027120727539],
    [1, 0, 22003062500000],
    [1, 0, 27296000000000],
    [10043594327130472636, 23082446, 0],
    [8336034337032909061, 23082446544464339, 0],
    [16717215784895280858, 17238287503805244910, 1251301],
    [10968831263951212033, 1434575446038410275, 6117934489438],
    [5536629379734406066, 14009569747841241694, 24414077768490],
    [1618806894932332403, 14938795732275951328, 21290759460297],
    [11363331325254998862, 6687653542888983473, 5577809833739],
    [8775167772751754889, 28238723295162625, 12043362538425],
    [2898202945316114123, 4745270274832691214, 5049001530824],
    [8868842714495185149, 926478968112308824, 21960257241617],
    [17052094667531999137, 9213681606604198526, 529050224525],
    [3658615537031138595, 13346223820579313024, 18317499474680],
    [12486952437987190747, 691642518601291257, 8952723500243],
    [912079238520577630, 1153720150033789192, 27859037494016],
    [10960072898031888042, 12089015034721780810, 6912062543294],
    [6129550094334741913, 3555868702841788854, 21950655346818],
    [7965724516573729481, 11708406782758214328, 14466192764028],
    [5801761178810791993, 9417497762905343943, 27772634714003],
    [13197466483098446116, 12838336066957615287, 20371510523576],
    [11326268638393107274, 13737708142128207419, 30392695967592],
    [3597339351794947379, 11683434809834695853, 20328744722650],
    [353880726151383715, 2689114340106315837, 8410633360270],
    [11154818162602073601, 8859225263374261032, 21390145777180],
    [5141043976157511027, 15761671984578600096, 28188480259563],
    [7188225141808859035, 7087267079878005352, 17899854441950],
    [13894168943295705186, 4601291730423121377, 11742384201518],
    [12176538069834828289, 9559411037059581623, 7982249436524],
    [7994239409235165185, 12969820289641388091, 25964518216710],
    [13707777025480065025, 13628239920285957130, 5126703095366],
    [10120227247676719105, 8049893933765800625, 7750738788366],
    [7358494763030413313, 10391755948840250234, 16398436385624],
    [7656119366529843201, 14454650777462444512, 17240563338218],
    [9223372036854775809, 14244638523341127254, 19434783588188],
    [1, 12246016810439753984, 16220772203401],
    [1, 9382741764551081984, 31625663857901],
    [1, 4608696190291148800, 17645508639450],
    [1, 1696483666416369664, 15066249837921],
    [1, 15416683541605384192, 15713091966563],
    [1, 7683140964294066176, 22115835740089],
    [1, 4611686018427387904, 32697416503906],
    [1, 0, 21090250000000],
    [1, 0, 1664000000000],
    [3877189582299842750, 352, 0],
    [7625565791857948239, 352210182868, 0],
    [16568435163612007485, 1722045467931902045, 19],
    [17592071940521808131, 16095324008152856733, 19093352271],
    [15158637878035490832, 15216188060094280738, 28495872529262],
    [17789243229146401894, 10793385929903030893, 4974824871207],
    [14677686051252896485, 12613277226875940039, 21799585110623],
    [3531237481269211987, 10644539625155600107, 23135683767128],
    [8074435404989280911, 6181262895644173983, 27480577041649],
    [7086549341467684428, 148914399627082292, 25841335086933],
    [10556134770918626964, 14379289774887985969, 12117008072665],
    [10772666134712966776, 11743339675582627452, 16345779502860],
    [6195173298198112621, 7841621929809463497, 32524636607719],
    [8144773843324250888, 11168944680251236601, 21735425095176],
    [14144284817150924692, 6178560202529287410, 13832605469704],
    [6464447844648863177, 13295243308201596112, 3080334940419],
    [15760468443293179136, 17040673746172470291, 6403720736583],
    [5172191224908322476, 14957442487039409922, 28487923776774],
    [2357554307308969013, 17778155426506992152, 15622810844581],
    [1602046917604361746, 14945404984219733899, 15781963755736],
    [7830970218109515846, 11590754866058681505, 28888810192027],
    [2899479134887821085, 6020790784469412466, 31899628336080],
    [15792042302392017913, 7934351824569522326, 29648326387722],
    [11286099112296056200, 5038361112172116744, 26634430122074],
    [15161477829153947405, 3305187319649924210, 2138273130103],
    [423831848142641768, 11470175511099161552, 9847179174563],
    [9707413321046312583, 7308362160352048610, 25251621799460],
    [10969483299803835621, 10666410671225576634, 1572396187106],
    [4326479556120930305, 2181639019945820785, 15842578227281],
    [12876227232041795585, 4615749499734847918, 24657118266888],
    [16967986827791171585, 14076159200958497580, 1544250220281],
    [1288146316538413057, 5470405257862074105, 24313763070119],
    [13715290452691779585, 4565741478181339543, 167296551263],
    [4683743612465315841, 8901832997861862329, 18783247509341],
    [1, 14190141170191714122, 10077482569333],
    [1, 4240772322245764096, 20085769249094],
    [1, 4422842195340951552, 8518229892728],
    [1, 15448426386733137920, 7800239762755],
    [1, 9203504548935630848, 11587837460872],
    [1, 5936377627571912704, 392498922981],
    [1, 468374361246531584, 17893321811676],
    [1, 0, 9948025390625],
    [1, 0, 1569000000000],
    [16344805304534272785, 5374300, 0],
    [26429987091348272, 5374300886053671, 0],
    [8691371289609838060, 8020875056524075716, 291341],
    [12980168378493046551, 1400288714762747253, 29197434812508],
    [14010125458129496140, 6136037711314764689, 30812075909803],
    [17061829677031795107, 15735488086392394102, 25259332635270],
    [2227928323072698521, 7735094782793634552, 2694853022518],
    [7394752319272287290, 7273689191766726188, 21302419320328],
    [8805771303577744758, 3410634565056431030, 28168394307481],
    [16371027194302248386, 4600927904885215898, 30617184890870],
    [9114324123731231603, 9154871331680374746, 28662249416801],
    [14468189808746991894, 6117978272461042996, 26721496286569],
    [2376054557800684349, 13116904339287496285, 17769331656266],
    [12462238943546048572, 867037205615660831, 1610711068809],
    [15334855370842605910, 1802487145191504830, 28809047002181],
    [7211347914013798463, 17242009718457409007, 19525097713023],
    [13763642332572548878, 13620802355488468049, 28031934691219],
    [16868268377740071384, 4442227880594435745, 30611738385175],
    [1120013377627684178, 17354849212854314181, 23319240813655],
    [15898107650717274389, 18202319179831567886, 11351940808260],
    [12281923376333274278, 17568634016348874558, 15940986749699],
    [6383530489286615045, 7496925598312450672, 17155952397558],
    [4253822060257126467, 601870379496813865, 19702406409151],
    [17614372438391501999, 11995106565680728027, 27583032627458],
    [4309951310554333451, 16331071694764184179, 4354650256029],
    [13106185988973773021, 9665962217000524208, 12957885309170],
    [2070134359761960548, 13682661374415474390, 8434523992861],
    [9399359914137865876, 6940361789924260864, 29469741738559],
    [17415053284723541265, 9658039831644010465, 27199376237766],
    [4840502610448261121, 6843715893910236922, 9414523563388],
    [5690599259712258049, 47089792870595660, 11644370998582],
    [114769594245185537, 14510386192097156932, 21814002552742],
    [3150620882578178049, 12059931208360040296, 4006786609611],
    [5136918324969472001, 14877013468459184620, 12747653770180],
    [7205759403792793601, 2397668560671695044, 27588806484516],
    [1, 2195572305559232232, 8740129977873],
    [1, 3261686279425953792, 13841119022213],
    [1, 9333850662059900928, 3205176816367],
    [1, 5036522340217782272, 29423505989058],
    [1, 2800120215143186432, 24002273030423],
    [1, 441634238459019264, 12567151794821],
    [1, 720575940379279360, 23173023941040],
    [1, 0, 16816039062500],
    [1, 0, 27620000000000],
    [98202693831717808, 82, 0],
    [12909287260170414080, 82005323578, 0],
    [11728631949380786234, 8218347283861607400, 4],
    [18263701925522197719, 17896200385973633643, 4445517498],
    [4868886449713321592, 16333242102094352209, 14010970154966],
    [5870139507184082355, 9981905728606788815, 10198885426828],
    [5978562500822661576, 15219470018924839012, 26252541120193],
    [10821136839630268473, 17152070168529617370, 20161825049122],
    [9490907630136752917, 17841343440958328027, 2594929815586],
    [10564005678001613990, 17291078023923990493, 12322967181165],
    [5754050547468481223, 16744804581790759223, 22381937351217],
    [3833909949855542603, 5001622214111594905, 23089907737675],
    [15446538552665967785, 9676746897435398146, 9291271138483],
    [14924837848804399131, 8109025833995118532, 27827524577500],
    [18140170340418344209, 5495826424046694744, 10460439591171],
    [11380424819825208972, 7890288164365705852, 14595297929347],
    [12416915664152252548, 8616438349039895217, 26755427733378],
    [17195282241626289959, 15787154801788760618, 3970467098058],
    [2649541045825281327, 12418659311480782502, 28106855823376],
    [16577429864268509677, 4486988874116669987, 14352673216870],
    [12051257060168107242, 4828971301551875409, 6502243240154],
    [5363884561143470798, 14769106422014442226, 2266261779058],
    [13054029903083620185, 7763933466423188156, 29298800634863],
    [566314952158634946, 10449097116253839963, 11247420883676],
    [1329472079642345683, 12870692502472900571, 17116566446689],
    [15686237486658857212, 11597479481311003817, 25185697721638],
    [1069073549290598130, 8294994869530047486, 27942628700622],
    [4323599065125928508, 16879315829924478241, 12750449672572],
    [17861823329752681587, 11873324837601439670, 380915029544],
    [17220149985412802079, 3277599055636107318, 5672643654229],
    [4344934572159429185, 15363467897354242201, 29269177679000],
    [2252927464837120001, 10351182204479784367, 15512832855263],
    [10910018171964489729, 12811517584931924466, 19679561138711],
    [3597328585515335681, 16988930699558748726, 16919694513759],
    [6972808074239148033, 11683499918824718325, 5727920971778],
    [2227030015734710273, 13119300691281647499, 24578633363799],
    [1152921504606846977, 10125549106595354099, 29015711198715],
    [1, 17505352699870800544, 11771548907116],
    [1, 6756039242241163264, 13932948967071],
    [1, 3537338758766526464, 20127366245621],
    [1, 6522626374119718912, 27893191759518],
    [1, 4733294203482669056, 22174353592284],
    [1, 16997710893603094528, 4060256592392],
    [1, 16717361816799281152, 25096921447753],
    [1, 0, 32073906250000],
    [1, 0, 24848000000000],
    [17238287503805244911, 1251301, 0],
    [1434575446038410276, 1251301934489438, 0],
    [14009569747841241695, 3943737498063000362, 67833],
    [14938795732275951329, 2870731037991212489, 2297213790438],
    [6687653542888983474, 7389433400402095883, 10470155622641],
    [28238723295162626, 5675049236146197433, 6385400581987],
    [4745270274832691215, 9953779846262904264, 3939307645035],
    [926478968112308825, 12691978937179636241, 26731539595486],
    [9213681606604198527, 15523327331528198029, 222688033556],
    [13346223820579313025, 15722603279568118520, 15124841521260],
    [691642518601291258, 11838632364171816147, 24684852324031],
    [1153720150033789193, 7832751832367143680, 9919641773546],
    [12089015034721780811, 12167724027162940862, 26090424614327],
    [3555868702841788855, 4108211144748152962, 15799659613641],
    [11708406782758214329, 7530983398136343676, 19913222706572],
    [9417497762905343944, 1117587133956542355, 21900408255428],
    [12838336066957615288, 17134748625149490872, 29636060584519],
    [13737708142128207420, 4039918359454207848, 6727928876584],
    [11683434809834695854, 1830218764589441242, 3624219004413],
    [2689114340106315838, 637895981480825742, 19965099216358],
    [8859225263374261033, 8246879226348334620, 3558034580410],
    [15761671984578600097, 12389239568142583275, 9146447064218],
    [7087267079878005353, 14041257178803154398, 27802671622022],
    [4601291730423121378, 16312515716494630702, 10118761178076],
    [9559411037059581624, 17088522799596987756, 25564884303248],
    [12969820289641388092, 3588932524637852678, 32144926370677],
    [13628239920285957131, 107218049069817414, 27509194556422],
    [8049893933765800626, 1596707240462008334, 1030005812302],
    [10391755948840250235, 17461913142391587672, 27726086557672],
    [14454650777462444513, 4366474266651610090, 20456946612208],
    [14244638523341127255, 5539304013194805084, 14320236707044],
    [12246016810439753985, 4762470619211987849, 15588300286272],
    [9382741764551081985, 10835638458986644717, 26944258174049],
    [4608696190291148801, 16141642290510052058, 27745587401137],
    [1696483666416369665, 17390568670756355425, 4529875040181],
    [15416683541605384193, 12536768491333867107, 14261942744616],
    [7683140964294066177, 13145148522871947193, 30248679619581],
    [4611686018427387905, 5665349945233068642, 15357712599929],
    [1, 17074607537751066240, 2937307119235],
    [1, 6241525660962062336, 16003925616329],
    [1, 1142860629783085056, 9929338353784],
    [1, 16287527416870469632, 30840061954598],
    [1, 9028002014738513920, 2598882948630],
    [1, 16217462258161156096, 13846489408969],
    [1, 11529215046068469760, 9673879150390],
    [1, 0, 24374625000000],
    [1, 0, 23104000000000],
    [1722045467931902046, 19, 0],
    [16095324008152856734, 19093352271, 0],
    [15216188060094280739, 646608198162977646, 1],
    [10793385929903030894, 12170458846894708007, 1035052700],
    [12613277226875940040, 1797330480103086687, 9884659761896],
    [10644539625155600108, 10332188564497263448, 17128097433480],
    [6181262895644173984, 7524259485079594225, 18312560109064],
    [148914399627082293, 62681109059153749, 26120407890924],
    [14379289774887985970, 13480636451804037081, 15340003397949],
    [11743339675582627453, 6948168233012789004, 4413730786766],
    [7841621929809463498, 12015502974041806055, 3534376660954],
    [11168944680251236602, 7343801660689004040, 28634651361721],
    [6178560202529287411, 13670580858640731144, 441398108285],
    [13295243308201596113, 5605073897566574851, 8317741083673],
    [17040673746172470292, 15387788940505247559, 11289303851664],
    [14957442487039409923, 17565181499678113030, 8848834173709],
    [17778155426506992153, 1893743623847493029, 6925952210397],
    [14945404984219733900, 10243498996716269784, 21981102660047],
    [11590754866058681506, 5619675836950314139, 22991555301193],
    [6020790784469412467, 10224869737511515088, 3913304643237],
    [7934351824569522327, 2574495974386198538, 5797554291299],
    [5038361112172116745, 7825756347302873178, 611139563706],
    [3305187319649924211, 12071550103794656887, 12474424235101],
    [11470175511099161553, 7195875213867606691, 5213654400042],
    [7308362160352048611, 18271364438406891044, 15402390089176],
    [10666410671225576635, 16966521933952564706, 28120990492650],
    [2181639019945820786, 289920862029570129, 10218919756997],
    [4615749499734847919, 7804199568098625032, 1221015716641],
    [14076159200958497581, 5758118571242446585, 17185423066506],
    [5470405257862074106, 4030788293606375591, 1418312148233],
    [4565741478181339544, 4387716460037196127, 25865218509471],
    [8901832997861862330, 16807506478881285981, 19103237858585],
    [14190141170191714123, 17033060604413529717, 25881911136751],
    [4240772322245764097, 10498418508292170054, 4591923364065],
    [4422842195340951553, 13237752038744465016, 225569120407],
    [15448426386733137921, 17737618428304633155, 8343717619975],
    [9203504548935630849, 13546183833248825736, 10503961558221],
    [5936377627571912705, 826778452978976229, 15565734340097],
    [468374361246531585, 13728076626990147292, 26113044819749],
    [1, 2794860281883592225, 12069744200525],
    [1, 8680705720425908736, 19277151509679],
    [1, 731520517439488000, 7343470582000],
    [1, 13120812320768917504, 6384039655806],
    [1, 2722954908557901824, 31102711280661],
    [1, 6860847004205973504, 13333147611681],
    [1, 6503197861922996224, 29217371927261],
    [1, 9223372036854775808, 13021352539062],
    [1, 0, 13238500000000],
    [8020875056524075717, 291341, 0],
    [1400288714762747254, 291341434812508, 0],
    [6136037711314764690, 12005656413127238315, 15793],
    [15735488086392394103, 4821130826186787462, 15793650827938],
    [7735094782793634553, 14377899467066168118, 674261354025],
    [7273689191766726189, 16575613239625444872, 17961779427491],
    [3410634565056431031, 4317827099179284377, 30883898565794],
    [4600927904885215899, 1242354770412171254, 9378234069876],
    [9154871331680374747, 994838588328896609, 29556067348187],
    [6117978272461042997, 17283309862013060457, 11995053930307],
    [13116904339287496286, 124242522249856586, 14147936930105],
    [867037205615660832, 11564608014666985609, 18745006735200],
    [1802487145191504831, 12401028575581654085, 16224626918656],
    [17242009718457409008, 2490725392961465727, 17664672261106],
    [13620802355488468050, 1949482237120640915, 25586135022494],
    [4442227880594435746, 15410502396166200087, 15262105681643],
    [17354849212854314182, 15694919529799920727, 16107835405008],
    [18202319179831567887, 10324869370171768388, 13008850823292],
    [17568634016348874559, 1631866459122189059, 10364559712290],
    [7496925598312450673, 172020494461226230, 24610088463658],
    [601870379496813866, 12734610307908856767, 11562009325249],
    [11995106565680728028, 1467513250829340930, 28353690344608],
    [16331071694764184180, 13558759428494307997, 7328079554052],
    [9665962217000524209, 7915355143999496434, 9732735021821],
    [13682661374415474391, 2876370200608797469, 13053429092262],
    [6940361789924260865, 343685370404989503, 4006155928341],
    [9658039831644010466, 4837266557407634630, 17173018631221],
    [6843715893910236923, 9622591415747161468, 23605262228745],
    [47089792870595661, 16503783814424220982, 7433521641725],
    [14510386192097156933, 5377083431343591334, 14589894671913],
    [12059931208360040297, 16508482371299291595, 15913291492276],
    [14877013468459184621, 10515883558812249028, 11188894926622],
    [2397668560671695045, 63492062913405476, 1822570067190],
    [2195572305559232233, 11571919759617799697, 13558003441911],
    [3261686279425953793, 2956602334970088581, 8439627315027],
    [9333850662059900929, 13604736747717849839, 30547160277733],
    [5036522340217782273, 16573540719338151362, 8933737514256],
    [2800120215143186433, 12620703004601168151, 17680898453442],
    [441634238459019265, 14649407809089591941, 28610684169680],
    [720575940379279361, 11290375247898624432, 11728794145988],
    [1, 11020319450292874212, 21700612052468],
    [1, 8754634933362354176, 22004597412714],
    [1, 12976319450332528640, 21354474589710],
    [1, 17447331119627239424, 19982703447686],
    [1, 3665184902673858560, 20102945821715],
    [1, 12949678516038795264, 21523198690071],
    [1, 72057594037927936, 17175702003479],
    [1, 0, 24343003906250],
    [1, 0, 16586000000000],
    [17896200385973633644, 4445517498, 0],
    [16333242102094352210, 4445517498970154966, 0],
    [9981905728606788816, 9413159735776077452, 240991986],
    [15219470018924839013, 14279163482889998017, 16114510288411],
    [17152070168529617371, 8693044629541194274, 22043774075003],
    [17841343440958328028, 11863110253260222498, 16507471250893],
    [17291078023923990494, 8319293368489531245, 17869643100495],
    [16744804581790759224, 3376307525676489265, 12623450989797],
    [5001622214111594906, 13205662254759912523, 25829183029997],
    [9676746897435398147, 5276250334231686323, 749715880385],
    [8109025833995118533, 13790198520922745052, 31169286026103],
    [5495826424046694745, 14195535250150996227, 13175747568159],
    [7890288164365705853, 16425228796427004035, 25119769541507],
    [8616438349039895218, 4295900841296269186, 15235890413437],
    [15787154801788760619, 4533952595483946442, 32637232881251],
    [12418659311480782503, 12885038019373447184, 7779245786062],
    [4486988874116669988, 12140736240487831910, 974698499310],
    [4828971301551875410, 6927124077155322074, 19694658150630],
    [14769106422014442227, 12477788342407819890, 24806375520148],
    [7763933466423188157, 7980854329409711087, 30612676422261],
    [10449097116253839964, 2062671021810827996, 10869432642980],
    [12870692502472900572, 2739521363598172769, 28068111817620],
    [11597479481311003818, 12897585686593465638, 7060148509750],
    [8294994869530047487, 1127632646629044686, 23606699179521],
    [16879315829924478242, 4833775019274666364, 15873061129088],
    [11873324837601439671, 15867662672939849256, 2944262039468],
    [3277599055636107319, 2092350330982953557, 26540860187717],
    [15363467897354242202, 13330062299842493592, 9285113426538],
    [10351182204479784368, 4479193352178519263, 12906722624125],
    [12811517584931924467, 3149393938889064983, 637242817558],
    [16988930699558748727, 9736379904070620767, 15382170728987],
    [11683499918824718326, 3816238703055069186, 31259527810212],
    [13119300691281647500, 11598915938798661975, 3236206878714],
    [10125549106595354100, 17821633264606555643, 8186628778492],
    [17505352699870800545, 2514623558764574316, 10748966112675],
    [6756039242241163265, 4976730480406253215, 3491136318016],
    [3537338758766526465, 17276563697191611637, 10816269789099],
    [6522626374119718913, 12524734095940998814, 10155936564394],
    [4733294203482669057, 15331551308930355164, 17578678967195],
    [16997710893603094529, 15417115581125943816, 23451831125061],
    [16717361816799281153, 6010750237807115593, 17477835763510],
    [1, 5624630987553628432, 12086325843423],
    [1, 14881848243837640704, 5599304911856],
    [1, 15281613886881529856, 3056806746609],
    [1, 14057902358273196032, 23025828417948],
    [1, 16075318494433902592, 20892762080413],
    [1, 13891916000577716224, 1181871444761],
    [1, 7205759403792793600, 4889753082275],
    [1, 0, 22947390625000],
    [1, 0, 5352000000000],
    [3943737498063000363, 67833, 0],
    [2870731037991212490, 67833213790438, 0],
    [7389433400402095884, 4535831408134330609, 3677],
    [5675049236146197434, 6204770794376564579, 3677245887913],
    [9953779846262904265, 13869812122751887467, 21929336361298],
    [12691978937179636242, 14253229412394467550, 20818751884021],
    [15523327331528198030, 12776557610216045332, 2805772669114],
    [15722603279568118521, 16493640728678654060, 20666692618575],
    [11838632364171816148, 9434398296825833151, 18767894122055],
    [7832751832367143681, 8773374058285327850, 3655511439756],
    [12167724027162940863, 12932015276748029367, 31116475605560],
    [4108211144748152963, 16293958583527755209, 8760701045952],
    [7530983398136343677, 13511893936143127948, 19648883297264],
    [1117587133956542356, 18409936402005226436, 3056732481237],
    [17134748625149490873, 2189663026458466887, 9941998004652],
    [4039918359454207849, 9497725274248154664, 27052118701870],
    [1830218764589441243, 14766925481127792125, 30510514872718],
    [637895981480825743, 6982373971809635814, 8590800516634],
    [8246879226348334621, 8616702383006884794, 30234378515251],
    [12389239568142583276, 3059473300040871066, 13107467112372],
    [14041257178803154399, 17123843157031495558, 20404165854379],
    [16312515716494630703, 11210627174210626524, 17579928285397],
    [17088522799596987757, 15868067138625928592, 28885607729316],
    [3588932524637852679, 4467869511636937589, 18596860209643],
    [107218049069817415, 10052108125844341766, 10731242203691],
    [1596707240462008335, 7470588003218451534, 10795544925873],
    [17461913142391587673, 2613527085490786280, 22193404981387],
    [4366474266651610091, 3632919450036549616, 12427141679587],
    [5539304013194805085, 179367907231218916, 2531196940958],
    [4762470619211987850, 13553068184555874624, 12958009723553],
    [10835638458986644718, 8798774862365584481, 2721734713298],
    [16141642290510052059, 910911255817064881, 24530476982541],
    [17390568670756355426, 2304331144765093813, 24845049380598],
    [12536768491333867108, 12248937023083640360, 16118124918041],
    [13145148522871947194, 10206039550662130685, 13593664016206],
    [5665349945233068643, 12267881323837852537, 20302553270512],
    [17074607537751066241, 2858642007937891971, 18672665043179],
    [6241525660962062337, 14171330289750320841, 8427154967293],
    [1142860629783085057, 6601103619749017720, 2813768229354],
    [16287527416870469633, 4919573414486739494, 25066357846544],
    [9028002014738513921, 3401998285294974486, 29200266690609],
    [16217462258161156097, 10799436256515532233, 49184422696],
    [11529215046068469761, 10083786644665753398, 15144585438612],
    [1, 6481194517685688896, 9620546643169],
    [1, 15104161756860547072, 25825351346258],
    [1, 9556039274244079616, 10322818798249],
    [1, 1376343134954323968, 4777518033927],
    [1, 15682488278596976640, 27655074611710],
    [1, 1506454075355430912, 510850149393],
    [1, 1152921504606846976, 11281081665039],
    [1, 0, 1551062500000],
    [1, 0, 672000000000],
    [12170458846894708008, 1035052700, 0],
    [1797330480103086688, 1035052700659761896, 0],
    [10332188564497263449, 6172559441576707976, 56110319],
    [7524259485079594226, 15083329738554729992, 11503334615117],
    [62681109059153750, 10013126833549229036, 26701817668943],
    [13480636451804037082, 5817156823499936061, 25935542812693],
    [6948168233012789005, 5282692560913632718, 21315348703],
    [12015502974041806056, 10252307034225766362, 26847286375337],
    [7343801660689004041, 17981881283247669689, 13225555778677],
    [13670580858640731145, 11689290159733383293, 23669974799737],
    [5605073897566574852, 5530668968487988249, 5497633677689],
    [15387788940505247560, 10083765740821947024, 8569299818165],
    [17565181499678113031, 2798423656816843533, 22197546642036],
    [1893743623847493030, 7614494481582904797, 27252151702850],
    [10243498996716269785, 17811318500083423695, 21826412782572],
    [5619675836950314140, 11641467412200329033, 9196965553510],
    [10224869737511515089, 17733593025296340645, 25958631085212],
    [2574495974386198539, 3689424000190644835, 5276961340004],
    [7825756347302873179, 14966634145516728506, 31332200004075],
    [12071550103794656888, 14171681941562070109, 14827811342862],
    [7195875213867606692, 8130575762882608170, 2574768248417],
    [18271364438406891045, 5234550794400656856, 5729440759395],
    [16966521933952564707, 3020576149360486378, 32355283765567],
    [289920862029570130, 3038675756589057221, 2367163745761],
    [7804199568098625033, 15470260187120878369, 17889164726942],
    [5758118571242446586, 3497929414841828746, 4766838644485],
    [4030788293606375592, 9935840636861015305, 24325189623133],
    [4387716460037196128, 3647355485153741471, 23901538623000],
    [16807506478881285982, 766100215038272793, 7704197723537],
    [17033060604413529718, 16128087474216800751, 30097041530375],
    [10498418508292170055, 16216631732633731297, 7687874305373],
    [13237752038744465017, 13760220872779997335, 23901879105367],
    [17737618428304633156, 3826276262374222087, 30551745943068],
    [13546183833248825737, 14938032745839181005, 22044207422851],
    [826778452978976230, 14479259995009508865, 7555809792377],
    [13728076626990147293, 2372033248156102437, 20857784922257],
    [2794860281883592226, 792005346826701645, 28817128588180],
    [8680705720425908737, 16278924527931792559, 916042934695],
    [731520517439488001, 17442516423538940144, 27047882482266],
    [13120812320768917505, 13844184233048446, 25178945560710],
    [2722954908557901825, 13486193870480782357, 8326000750494],
    [6860847004205973505, 11931315179184648737, 12190731088034],
    [6503197861922996225, 16492562205587485405, 12450646797891],
    [9223372036854775809, 12128987217680380854, 11843894063588],
    [1, 10568123814189138176, 12772657513714],
    [1, 17007583519117541376, 17650572899139],
    [1, 143791533903052800, 13123921982950],
    [1, 12398714235792654336, 13798007794954],
    [1, 9659957317919047680, 27914672135645],
    [1, 9412523221204336640, 24029523667335],
    [1, 4611686018427387904, 27015510253906],
    [1, 0, 24914250000000],
    [1, 0, 26240000000000],
    [12005656413127238316, 15793, 0],
    [4821130826186787463, 15793650827938, 0],
    [14377899467066168119, 3237900842885170729, 856],
    [16575613239625444873, 7515893506498066595, 856175526956],
    [4317827099179284378, 7300206309181072546, 17452407437403],
    [1242354770412171255, 5999737279837044, 14427395744977],
    [994838588328896610, 7556839307242450651, 25809000325246],
    [17283309862013060458, 12946035041643640643, 24702409657079],
    [124242522249856587, 15885877642352740665, 19191701805965],
    [11564608014666985610, 10770818348246089568, 7053861175152],
    [12401028575581654086, 11635415503599551744, 16240583887232],
    [2490725392961465728, 6248053924100826098, 18816630757138],
    [1949482237120640916, 16894170802729859998, 5906338707681],
    [15410502396166200088, 6143589029651889899, 30945915834834],
    [15694919529799920728, 11812087701837886160, 4562333044628],
    [10324869370171768389, 7306705080150829180, 3988640334557],
    [1631866459122189060, 1485332570280714274, 733396097276],
    [172020494461226231, 18042602303295630634, 22780080520039],
    [12734610307908856768, 13397029889257074369, 31591978091430],
    [1467513250829340931, 9948104869613411488, 17318726254445],
    [13558759428494307998, 10836066241170646532, 16237539287845],
    [7915355143999496435, 18330574781234459389, 25381587424327],
    [2876370200608797470, 666297360208433062, 5191993702450],
    [343685370404989504, 5035352224889324309, 14386036120052],
    [4837266557407634631, 1341745796439923765, 6644272966991],
    [9622591415747161469, 6846932182653803785, 11599072736185],
    [16503783814424220983, 6727685027257825533, 13241371172937],
    [5377083431343591335, 2168538874806877737, 8265364708536],
    [16508482371299291596, 17694936100676971444, 7352117556727],
    [10515883558812249029, 2163944241059563294, 30199959244408],
    [63492062913405477, 6727780864524301558, 20088117307652],
    [11571919759617799698, 8599551977795002615, 10500364713731],
    [2956602334970088582, 15428264807806859091, 16131466182646],
    [13604736747717849840, 2126771385339683557, 16374836367911],
    [16573540719338151363, 15094316562082972944, 4647115292507],
    [12620703004601168152, 8111300598225956802, 32603818264540],
    [14649407809089591942, 9481215200564260304, 2012439714486],
    [11290375247898624433, 16836674128623424708, 6838513977705],
    [11020319450292874213, 7087243115299722740, 18793912717933],
    [8754634933362354177, 2343560867338408810, 21101384200219],
    [12976319450332528641, 3431385749090422286, 28699127044689],
    [17447331119627239425, 3504545517469224582, 23121186015794],
    [3665184902673858561, 3333759805712094227, 18994189981793],
    [12949678516038795265, 3595183476205994775, 22625180723481],
    [72057594037927937, 14191566632569921303, 10521194895286],
    [1, 12917427671358095562, 6070769326368],
    [1, 3883793922738316288, 6432700255157],
    [1, 7857281689266421760, 19381210540890],
    [1, 15987081651486195712, 27482425944093],
    [1, 16827562156399525888, 26653866661432],
    [1, 7012737938513461248, 5688912223972],
    [1, 7385903388887613440, 7908380161285],
    [1, 0, 13573400390625],
    [1, 0, 27617000000000],
    [9413159735776077453, 240991986, 0],
    [14279163482889998018, 240991986510288411, 0],
    [8693044629541194275, 14135788013842776187, 13064201],
    [11863110253260222499, 13284322918167594445, 22537766302603],
    [8319293368489531246, 7264587765474046287, 29579720144588],
    [3376307525676489266, 16176482219778368741, 14028393814091],
    [13205662254759912524, 5401983818872095469, 6219876928858],
    [5276250334231686324, 11208857446851049921, 3418292842129],
    [13790198520922745053, 13794690008281035639, 28305607633379],
    [14195535250150996228, 14519782740993303071, 10723747811643],
    [16425228796427004036, 10885858587044789123, 20795787118999],
    [4295900841296269187, 8710500938899914621, 2455590123576],
    [4533952595483946443, 1284182587483102819, 14392472197202],
    [12885038019373447185, 10346074482131502030, 22610069615677],
    [12140736240487831911, 9429804686255246574, 29757560861821],
    [6927124077155322075, 6412022633845121254, 13437511190736],
    [12477788342407819891, 8892351297529018260, 18640347596443],
    [7980854329409711088, 14098160105983060597, 1691482055329],
    [2062671021810827997, 13793833029739474340, 25249764262790],
    [2739521363598172770, 16367653765996977044, 17286747765186],
    [12897585686593465639, 10684788343333772342, 14786887292288],
    [1127632646629044687, 13272681218705145345, 5504579223536],
    [4833775019274666365, 11093568615497829248, 16368719513490],
    [15867662672939849257, 12488220765137758124, 18322601383559],
    [2092350330982953558, 3727114642519696453, 5767676987804],
    [13330062299842493593, 11549865375695057514, 2460202047289],
    [4479193352178519264, 11292809154908783229, 5945626119456],
    [3149393938889064984, 17723904861837310998, 19744612184410],
    [9736379904070620768, 14877674388187150875, 29018960814807],
    [3816238703055069187, 12178961950105734308, 25303806520344],
    [11598915938798661976, 4540604068069253114, 11288660222850],
    [17821633264606555644, 13832478722153359868, 9090246146639],
    [2514623558764574317, 1308046668730371491, 31311749860174],
    [4976730480406253216, 18400531023544756800, 19278070909351],
    [17276563697191611638, 9789823458621466539, 2471997494785],
    [12524734095940998815, 1924870562610267306, 22017530707393],
    [15331551308930355165, 5290016144582400923, 15809104347442],
    [15417115581125943817, 15162883663174059077, 306286772349],
    [6010750237807115594, 8078086116520046390, 16509821981570],
    [5624630987553628433, 15731407332173190623, 4994437913925],
    [14881848243837640705, 5346389182763011056, 7493852801300],
    [15281613886881529857, 6368422217216252401, 10516289828338],
    [14057902358273196033, 2961453088119116188, 13810345232860],
    [16075318494433902593, 10932141691610170525, 18908160540693],
    [13891916000577716225, 11034016191361782553, 16405592632588],
    [7205759403792793601, 5455325785621453219, 27916598155216],
    [1, 7735615202566149352, 6096295733803],
    [1, 7502396497775759360, 10795419348540],
    [1, 1601286435751591936, 11836406705729],
    [1, 11449383158571597824, 11841086805911],
    [1, 13043944595690356736, 22423620672304],
    [1, 7773494431818186752, 23344707113653],
    [1, 9943947977234055168, 4789421401977],
    [1, 0, 26489539062500],
    [1, 0, 27364000000000],
    [4535831408134330610, 3677, 0],
    [6204770794376564580, 3677245887913, 0],
    [13869812122751887468, 6343817245135589714, 199],
    [14253229412394467551, 17549323075660516085, 199343899021],
    [12776557610216045333, 3948641822109421754, 397951350710],
    [16493640728678654061, 1750739713693534543, 14262214056302],
    [9434398296825833152, 962163898128633415, 22894094907790],
    [8773374058285327851, 7967320249386531212, 31118052159009],
    [12932015276748029368, 3018466665533383224, 28193431909296],
    [16293958583527755210, 15076865731854945472, 29616163631405],
    [13511893936143127949, 691187172844604400, 12589817318529],
    [18409936402005226437, 13274492813370992341, 19585037469331],
    [2189663026458466888, 6364168818499152300, 1683719611697],
    [9497725274248154665, 17599380787401914158, 25905345002282],
    [14766925481127792126, 3782323149461692814, 31530954064344],
    [6982373971809635815, 14470163442442237466, 472205040148],
    [8616702383006884795, 476109872130437939, 6676784429132],
    [3059473300040871067, 16330548844673355700, 14412025809967],
    [17123843157031495559, 14089158961463739563, 19503885280826],
    [11210627174210626525, 13385510793074798805, 26170763774837],
    [15868067138625928593, 1549401308746959012, 2933725629994],
    [4467869511636937590, 4607384943843027435, 3626083993213],
    [10052108125844341767, 5157353797716093483, 18045249766838],
    [7470588003218451535, 10846828782671550129, 17846279580709],
    [2613527085490786281, 9915857350819131531, 11301588007766],
    [3632919450036549617, 1673544973504317923, 31574537539704],
    [179367907231218917, 14780986291622785694, 4216090723054],
    [13553068184555874625, 8168111319515466401, 750801278872],
    [8798774862365584482, 16345760387859734482, 22424442794201],
    [910911255817064882, 3177475373321281805, 28889886105446],
    [2304331144765093814, 2558676822419554038, 8038172251285],
    [12248937023083640361, 8813474062662382873, 21653138706148],
    [10206039550662130686, 5426294560236228430, 3812477779386],
    [12267881323837852538, 9919177474128333040, 15802294160017],
    [2858642007937891972, 6197383943089627371, 19089537719688],
    [14171330289750320842, 13673239314867423997, 23944335960856],
    [6601103619749017721, 9309584098968723946, 11032741227788],
    [4919573414486739495, 4647101757759615504, 11532504673565],
    [3401998285294974487, 1405809295505096753, 11549251919891],
    [10799436256515532234, 11332704079573859112, 24595076209074],
    [10083786644665753399, 2960072434514044308, 22962614347119],
    [6481194517685688897, 3887266602785432801, 9583160465848],
    [15104161756860547073, 14545546084687849554, 6584210729144],
    [9556039274244079617, 4617763804182385321, 10424788515633],
    [1376343134954323969, 7857823815580249095, 31537250329477],
    [15682488278596976641, 10939326736548364798, 25477425973482],
    [1506454075355430913, 12262012446566951953, 18666593022090],
    [1152921504606846977, 12555024338687723023, 28810664725026],
    [1, 3332969632922829472, 18978680609233],
    [1, 15535060143360327680, 6609180680645],
    [1, 15794322927987458048, 25029842157297],
    [1, 10571474314433921024, 16113856211961],
    [1, 16679514427547975680, 27641573080770],
    [1, 16925653299565166592, 32450904198288],
    [1, 16717361816799281152, 3216917541503],
    [1, 0, 12927906250000],
    [1, 0, 32016000000000],
    [6172559441576707977, 56110319, 0],
    [15083329738554729993, 56110319334615117, 0],
    [10013126833549229037, 9335385384027907407, 3041746],
    [5817156823499936062, 13237828406194798613, 27090506072255],
    [5282692560913632719, 15667486867836528863, 16575717624115],
    [10252307034225766363, 17982325043592934313, 18739849336164],
    [17981881283247669690, 17159117626917379189, 5476974823793],
    [11689290159733383294, 8336208968408929657, 2417930197630],
    [5530668968487988250, 12767090573379150201, 23166451906793],
    [10083765740821947025, 14736070002412246709, 30953692105366],
    [2798423656816843534, 9697296975344560756, 2710798843955],
    [7614494481582904798, 7291706381199103298, 16435525691522],
    [17811318500083423696, 18098546597780825068, 10370395284194],
    [11641467412200329034, 132913902678533478, 8930981124177],
    [17733593025296340646, 1879347741692007580, 6225007205277],
    [3689424000190644836, 4056624629214083684, 23453101879645],
    [14966634145516728507, 14713227692042795499, 29021219910061],
    [14171681941562070110, 7366415124022528526, 29101797605671],
    [8130575762882608171, 825770353378039393, 295399334164],
    [5234550794400656857, 10244023944395357795, 8468044765100],
    [3020576149360486379, 14302658294713551167, 22444555329650],
    [3038675756589057222, 14246653166206862817, 24690775348659],
    [15470260187120878370, 12404486258134291102, 21939772312615],
    [3497929414841828747, 8887442218637942533, 19495672448547],
    [9935840636861015306, 1186724038081863005, 1571481789208],
    [3647355485153741472, 211331772484951576, 8984064332439],
    [766100215038272794, 6311919513247413649, 4759011456318],
    [16128087474216800752, 8131780018703965703, 30014342169842],
    [16216631732633731298, 2262544347226725725, 1266440824678],
    [13760220872779997336, 15318188749880522583, 26470122652774],
    [3826276262374222088, 1073117094162650652, 1126830400676],
    [14938032745839181006, 4447950380665871747, 25764058173794],
    [14479259995009508866, 5373227185066463609, 4450241123873],
    [2372033248156102438, 6739731406934274193, 5665291283229],
    [792005346826701646, 12328812617001239444, 11037365361571],
    [16278924527931792560, 3246111484407310759, 23459668346271],
    [17442516423538940145, 3250825415176839770, 17823175972056],
    [13844184233048447, 16146270540000862342, 5336176227598],
    [13486193870480782358, 15686773375425916830, 29966875291079],
    [11931315179184648738, 11920791905793880226, 28103850381688],
    [16492562205587485406, 1853290561644080707, 20856646227424],
    [12128987217680380855, 12157689141506159076, 21984100467082],
    [10568123814189138177, 18100318838862562546, 16778659069648],
    [17007583519117541377, 7171257882533475139, 32464981220250],
    [143791533903052801, 14477550873015039462, 23450388754668],
    [12398714235792654337, 8109481182495403274, 28908784829605],
    [9659957317919047681, 14565395719337663965, 17573439615855],
    [9412523221204336641, 1860318978161305991, 13167789591684],
    [4611686018427387905, 16268646275151585618, 19588100848093],
    [1, 13759019338835519104, 31197881925081],
    [1, 17003783176010661888, 32217745877932],
    [1, 18357489540307877888, 27564921776932],
    [1, 905481790074912768, 27428995161502],
    [1, 3638882110636294144, 23966049086266],
    [1, 9011702854368362496, 11066197264194],
    [1, 11529215046068469760, 18242488525390],
    [1, 0, 25166625000000],
    [1, 0, 19008000000000],
    [3237900842885170730, 856, 0],
    [7515893506498066596, 856175526956, 0],
    [7300206309181072547, 7625299565768063067, 46],
    [5999737279837045, 13889021769065194705, 46413368317],
    [7556839307242450652, 14498170692313014398, 19453752925378],
    [12946035041643640644, 1541631360972245751, 23746785947408],
    [15885877642352740666, 9903958882920799117, 12048083572003],
    [10770818348246089569, 15744148547788062576, 21795536894686],
    [11635415503599551745, 17936061801321712000, 31454853492002],
    [6248053924100826099, 9986394078324430610, 27938972315858],
    [16894170802729859999, 13849561248103430369, 12498541363507],
    [6143589029651889900, 12142378807953854930, 16691750786219],
    [11812087701837886161, 2513847703931031444, 21675658239674],
    [7306705080150829181, 1752183758129038045, 24250136275957],
    [1485332570280714275, 15824833342220556540, 11253094986071],
    [18042602303295630635, 8168747198299470695, 12631857865934],
    [13397029889257074370, 17414799840149357478, 9422442828672],
    [9948104869613411489, 83147520704167789, 4992944058191],
    [10836066241170646533, 2383542703041471269, 12111004507436],
    [18330574781234459390, 15540952725549257799, 7468129212108],
    [666297360208433063, 6949835416232048690, 22220842476735],
    [5035352224889324310, 15398868937585367540, 9407376751332],
    [1341745796439923766, 14710915985268256079, 31460834774357],
    [6846932182653803786, 9665704836873335737, 3413797480353],
    [6727685027257825534, 2528789298740305993, 10145523978909],
    [2168538874806877738, 10562914675687726264, 21149137085942],
    [17694936100676971445, 17671658300096837111, 9718572616751],
    [2163944241059563295, 356471401631698552, 3119957982516],
    [6727780864524301559, 7450677157218003204, 15668019324353],
    [8599551977795002616, 317174560787152643, 26049403902018],
    [15428264807806859092, 7251937674440720374, 22594017194067],
    [2126771385339683558, 1252631516699038247, 28755393128329],
    [15094316562082972945, 10818009768860843867, 10121067905290],
    [8111300598225956803, 12330114194950162396, 16650586445484],
    [9481215200564260305, 15826681638261168822, 22188668416829],
    [16836674128623424709, 14240150078499211625, 29501857966130],
    [7087243115299722741, 10725372116242125421, 10290771960082],
    [2343560867338408811, 8434925524647833627, 8466581423587],
    [3431385749090422287, 17133902668520348241, 1507457258228],
    [3504545517469224583, 15093996047981365810, 21236928830724],
    [3333759805712094228, 6187974166976813153, 23812818247165],
    [3595183476205994776, 13946144707720259865, 7677335450751],
    [14191566632569921304, 9138079832881862582, 13439756022019],
    [12917427671358095563, 6600697628576225568, 12547495376300],
    [3883793922738316289, 8137099536646556597, 13740357824535],
    [7857281689266421761, 14169855543453903706, 12311441113049],
    [15987081651486195713, 3706403268650100765, 32729768149408],
    [16827562156399525889, 14736932266877982264, 16800200924523],
    [7012737938513461249, 18004795125138956004, 7531798890698],
    [7385903388887613441, 9068489270661002501, 2250976041899],
    [1, 7758835715193269217, 7083491603788],
    [1, 16943947811135261184, 13644420607326],
    [1, 6745843108403216384, 27998918533251],
    [1, 12338229654069444608, 24707365692887],
    [1, 14358176069683511296, 26071668856769],
    [1, 7083775185760813056, 6081778358284],
    [1, 5350276357316149248, 6156384012222],
    [1, 9223372036854775808, 1982290039062],
    [1, 0, 4374500000000],
    [14135788013842776188, 13064201, 0],
    [13284322918167594446, 13064201766302603, 0],
    [7264587765474046288, 14699116688460625612, 708211],
    [16176482219778368742, 6684126021499623499, 20083796840712],
    [5401983818872095470, 12614606079692508506, 4360362347197],
    [11208857446851049922, 15358270276683001489, 19133683839165],
    [13794690008281035640, 18077126190953408995, 12477832573499],
    [14519782740993303072, 7864121581925945659, 12859979962974],
    [10885858587044789124, 3518026639210514839, 6750426314885],
    [8710500938899914622, 4698310163811252280, 14469190712606],
    [1284182587483102820, 6101155398200416338, 32030254695904],
    [10346074482131502031, 16049178580360033341, 1504330744296],
    [9429804686255246575, 3167464649127375997, 488870027714],
    [6412022633845121255, 12778923935480989904, 8642171708602],
    [8892351297529018261, 11875553912612980379, 9402692746854],
    [14098160105983060598, 10628760849351697057, 15974643775067],
    [13793833029739474341, 3408944711673234310, 13915576186280],
    [16367653765996977045, 2102091496050506178, 13736184799263],
    [10684788343333772343, 6254611118630245760, 24607113954608],
    [13272681218705145346, 2647941151989776368, 17712339063148],
    [11093568615497829249, 8855437735410157458, 4460143545177],
    [12488220765137758125, 10184270603132180103, 2905480054241],
    [3727114642519696454, 12079083162535627164, 17889552090415],
    [11549865375695057515, 5952952868716156729, 17711654808410],
    [11292809154908783230, 11958907037815852320, 11098322710221],
    [17723904861837310999, 10101562137321697626, 11981648293649],
    [14877674388187150876, 13633527411279258327, 28433547606780],
    [12178961950105734309, 16555627393501768728, 15100739075001],
    [4540604068069253115, 6359650463500280706, 15289897482359],
    [13832478722153359869, 8093923611102181967, 30839344757342],
    [1308046668730371492, 2848827352928635726, 31326438772478],
    [18400531023544756801, 4686723431961561511, 20222154435240],
    [9789823458621466540, 6245554925867652609, 27304254067786],
    [1924870562610267307, 17527406820792516033, 21578338572210],
    [5290016144582400924, 12119966834653692210, 6066950162627],
    [15162883663174059078, 11606502845877928061, 18627657024718],
    [8078086116520046391, 424311496652297090, 17614629189780],
    [15731407332173190624, 5977664048034127173, 14484023001972],
    [5346389182763011057, 6702712461535947028, 17268324049817],
    [6368422217216252402, 11384349854055020018, 9113363354770],
    [2961453088119116189, 3782955013294836188, 5266617146842],
    [10932141691610170526, 3531805968821207061, 7642205074402],
    [11034016191361782554, 3867566898657193228, 13282191459585],
    [5455325785621453220, 12688734637425072080, 17665209661221],
    [7735615202566149353, 18435982764454619691, 30501687857682],
    [7502396497775759361, 4728836163964677692, 4626999416628],
    [1601286435751591937, 2120012917348838977, 5940256350722],
    [11449383158571597825, 9856965465824679831, 8706114926130],
    [13043944595690356737, 11217197671061248816, 13874534347168],
    [7773494431818186753, 3840562972677739189, 29088608085504],
    [9943947977234055169, 17104366978925258617, 26112208197335],
    [1, 16177877219841993444, 22231927229591],
    [1, 7338522384267208704, 3223877004481],
    [1, 10935240458612244480, 11457397822095],
    [1, 1732868046462124032, 4751592800573],
    [1, 557965042578882560, 16701093938965],
    [1, 10454684322475540480, 1813030247345],
    [1, 13907115649320091648, 7089566749572],
    [1, 0, 4996753906250],
    [1, 0, 23114000000000],
    [6343817245135589715, 199, 0],
    [17549323075660516086, 199343899021, 0],
    [3948641822109421755, 14876458284855834550, 10],
    [1750739713693534544, 10450704926982265198, 10806454419],
    [962163898128633416, 5385653213018257806, 26771566533849],
    [7967320249386531213, 12735569669880147489, 7385291956845],
    [3018466665533383225, 3619762560577729456, 8813690396615],
    [15076865731854945473, 11123448126624084269, 8135196227721],
    [691187172844604401, 4072715118852885633, 14473603003331],
    [13274492813370992342, 18239087231420827283, 13251220782328],
    [6364168818499152301, 423431461216085297, 15608988742900],
    [17599380787401914159, 9360976716520160042, 13556022954265],
    [3782323149461692815, 11655927117263208920, 18713507459564],
    [14470163442442237467, 2646622721938364948, 29164631869075],
    [476109872130437940, 4496462484548171852, 18067143473705],
    [16330548844673355701, 13140258519803350063, 14889243753719],
    [14089158961463739564, 13089764333320627770, 15607712334841],
    [13385510793074798806, 6926286827289840501, 17401709597546],
    [1549401308746959013, 4985580225290866218, 4970375474761],
    [4607384943843027436, 10478790837359789693, 28233270268845],
    [5157353797716093484, 10041191967455692214, 5037568056389],
    [10846828782671550130, 5035461258013813797, 23621544334107],
    [9915857350819131532, 14208759661559249750, 21275272972901],
    [1673544973504317924, 12347272163241758840, 2661770258404],
    [14780986291622785695, 3372534174410277614, 26596669346965],
    [8168111319515466402, 17226704187274712984, 21653182825443],
    [16345760387859734483, 4250480179449852121, 17379933861505],
    [3177475373321281806, 4303723537755414374, 13953230418992],
    [2558676822419554039, 8680503847344854165, 13360233305320],
    [8813474062662382874, 8817608623911079652, 21736470571056],
    [5426294560236228431, 5692030448698539450, 26672478003521],
    [9919177474128333041, 16908836314686769809, 8513308565588],
    [6197383943089627372, 6073762347067727240, 8276916629853],
    [13673239314867423998, 10931066692585106200, 29021329259316],
    [9309584098968723947, 14466591364061539596, 31540592574312],
    [4647101757759615505, 4958077340960173341, 32616784235489],
    [1405809295505096754, 4076890037156765715, 3041268777911],
    [11332704079573859113, 14083973146609179058, 17335221008651],
    [2960072434514044309, 2565183738039805295, 14603763493714],
    [3887266602785432802, 1482420938751351224, 11090139058889],
    [14545546084687849555, 2151089495335413944, 4809080362200],
    [4617763804182385322, 3738604531753220913, 21720116610795],
    [7857823815580249096, 14195686514836005765, 18155202670157],
    [10939326736548364799, 17808833916231796970, 28237769549707],
    [12262012446566951954, 1302384553035657354, 10123965418821],
    [12555024338687723024, 1672033517974833698, 19781070602408],
    [3332969632922829473, 11673925532927662545, 16552090641118],
    [15535060143360327681, 3905334232240480709, 8926632844771],
    [15794322927987458049, 17411087320267472625, 7651211708592],
    [10571474314433921025, 16573305231063706617, 2224943856934],
    [16679514427547975681, 15481103236037148354, 32038898440676],
    [16925653299565166593, 907440704754420880, 6628839232288],
    [16717361816799281153, 3224970785139077759, 4896049192459],
    [1, 10560826509734608144, 24075174826016],
    [1, 4700940027512659968, 20512572503552],
    [1, 9733694683502084096, 30208254838469],
    [1, 1995535635724632064, 1733527664646],
    [1, 10629833226245373952, 30726108178203],
    [1, 15729384648544878592, 26395576244413],
    [1, 7205759403792793600, 6333852691650],
    [1, 0, 11458390625000],
    [1, 0, 2792000000000],
    [9335385384027907408, 3041746, 0],
    [13237828406194798614, 3041746506072255, 0],
    [15667486867836528864, 7535526066623007027, 164893],
    [17982325043592934314, 11302146918409311588, 1053408501686],
    [17159117626917379190, 2480833299122194801, 8118612690612],
    [8336208968408929658, 11513226205589330558, 1716134486242],
    [12767090573379150202, 4073957068281936105, 8418624133243],
    [14736070002412246710, 3729887061093812886, 22651220849655],
    [9697296975344560757, 13616911779739451443, 29687202197582],
    [7291706381199103299, 13039053282195777666, 12366738174266],
    [18098546597780825069, 14490756113210417890, 12602706848494],
    [132913902678533479, 17432486112977557585, 27374785545462],
    [1879347741692007581, 14308820825344039837, 17654945016965],
    [4056624629214083685, 4190949538817536349, 27781775682731],
    [14713227692042795500, 13616552502810964397, 27819227191829],
    [7366415124022528527, 4898145803694965031, 6677738154790],
    [825770353378039394, 1399036321001644308, 27430265529016],
    [10244023944395357796, 17170331128243738540, 8888075841910],
    [14302658294713551168, 10641321388205367410, 29046930805515],
    [14246653166206862818, 6648873641312572851, 4875576867188],
    [12404486258134291103, 5988456964560374823, 31092360436162],
    [8887442218637942534, 9972593758348346915, 22978324634902],
    [1186724038081863006, 16709668921872818968, 7446540615390],
    [211331772484951577, 6094829131503407767, 32478905832967],
    [6311919513247413650, 4892016478899926334, 5639330401349],
    [8131780018703965704, 13150857244079031538, 3141265196744],
    [2262544347226725726, 12983943395318785894, 1736712909399],
    [15318188749880522584, 15341644584614757478, 29271703860981],
    [1073117094162650653, 7507635124856644772, 14069831672219],
    [4447950380665871748, 11619655367084544354, 8603406989715],
    [5373227185066463610, 11553116952478783009, 31123629902779],
    [6739731406934274194, 17392150014233193245, 3003626295724],
    [12328812617001239445, 8877887560294980515, 4524942830341],
    [3246111484407310760, 18404180619915609503, 11013481271248],
    [3250825415176839771, 10079413095288181976, 4048997692630],
    [16146270540000862343, 14102802966539105550, 13526546406078],
    [15686773375425916831, 13333966026135891399, 23230764514480],
    [11920791905793880227, 12344968670173516152, 31920722835746],
    [1853290561644080708, 10577007819804726752, 31010669222092],
    [12157689141506159077, 15337041354031088010, 22732573380742],
    [18100318838862562547, 14333607285614673616, 4230831422677],
    [7171257882533475140, 17171597563219696538, 15573777026407],
    [14477550873015039463, 2849642930482147564, 3431930874169],
    [8109481182495403275, 14791248423979435173, 18745154479452],
    [14565395719337663966, 13882371364576310127, 9564801835183],
    [1860318978161305992, 11735995808941329540, 8367752564859],
    [16268646275151585619, 11376996674339273181, 20603636209607],
    [13759019338835519105, 9849638057168043481, 22471616748225],
    [17003783176010661889, 18241520229279361964, 23233533949948],
    [18357489540307877889, 1865852368526961444, 14332988874793],
    [905481790074912769, 10601487369276448158, 24617101148059],
    [3638882110636294145, 15999931310312762170, 16283574707781],
    [9011702854368362497, 5773775867713013570, 9797867358014],
    [11529215046068469761, 17726239863982547534, 18238312997016],
    [1, 9711316695888316992, 24728960941388],
    [1, 17872002620723724288, 15692526451532],
    [1, 7429694208660733952, 31564968843203],
    [1, 1782821038871019520, 22467402764530],
    [1, 3225250234313474048, 4338096646922],
    [1, 10009250171830927360, 11018174841165],
    [1, 1152921504606846976, 16717542602539],
    [1, 0, 14123062500000],
    [1, 0, 6816000000000],
    [7625299565768063068, 46, 0],
    [13889021769065194706, 46413368317, 0],
    [14498170692313014399, 9519880170333822146, 2],
    [1541631360972245752, 2285186318012886800, 2516073738],
    [9903958882920799118, 9706420951402272035, 15626123880198],
    [15744148547788062577, 2369632031840402142, 9990526186134],
    [17936061801321712001, 15599123897979399458, 12950128458009],
    [9986394078324430611, 17579576584023912658, 31001845630200],
    [13849561248103430370, 3480927339588501811, 1272952990756],
    [12142378807953854931, 3547346616671294635, 11300188701449],
    [2513847703931031445, 7705317123868384954, 17161192302045],
    [1752183758129038046, 4969425237478353909, 26077417706078],
    [15824833342220556541, 17043246700132217175, 4702269393081],
    [8168747198299470696, 17053788362783499470, 18617923916254],
    [17414799840149357479, 11102988228454224768, 20958924487719],
    [83147520704167790, 16944305387801685839, 15399601894197],
    [2383542703041471270, 11725142977459199276, 29493918552635],
    [15540952725549257800, 8175984171998533324, 21051635621274],
    [6949835416232048691, 1372352885142856895, 23962443220990],
    [15398868937585367541, 17975093466502888164, 2046074395398],
    [14710915985268256080, 6467823391459085653, 6918974431769],
    [9665704836873335738, 11319386883146885025, 25113350621408],
    [2528789298740305994, 9141999262922068637, 18656613625192],
    [10562914675687726265, 1587330393383478774, 28008495588773],
    [17671658300096837112, 884187548095712303, 9637086049353],
    [356471401631698553, 488841225726377268, 13385047931903],
    [7450677157218003205, 17462624199405856193, 31743026500135],
    [317174560787152644, 13183677579115583554, 4647946650754],
    [7251937674440720375, 11645015818917277779, 1154714688593],
    [1252631516699038248, 8760523002035971977, 23633631277572],
    [10818009768860843868, 10068817678491468042, 29188474908903],
    [12330114194950162397, 1273658177787418284, 12519545831700],
    [15826681638261168823, 3100019384328057661, 276069045148],
    [14240150078499211626, 10363063568089458738, 21404168052387],
    [10725372116242125422, 13030756371481403666, 24227561782801],
    [8434925524647833628, 6538878900684195299, 15889706398718],
    [17133902668520348242, 8984884716779098868, 13310354473335],
    [15093996047981365811, 8728727397070363908, 16759487071576],
    [6187974166976813154, 6398650562917867005, 1368473185260],
    [13946144707720259866, 1190873176164938879, 11244346871542],
    [9138079832881862583, 4383628525805121795, 3830064557364],
    [6600697628576225569, 10189374699734119852, 11572237636978],
    [8137099536646556598, 5276291920541626391, 5490552367109],
    [14169855543453903707, 2692252373800386521, 26629286028358],
    [3706403268650100766, 11578684995169173920, 25670145947293],
    [14736932266877982265, 5799408022254132587, 13981627681771],
    [18004795125138956005, 15548569837712345290, 3051314386538],
    [9068489270661002502, 15763030464322902955, 5738842889659],
    [7758835715193269218, 13257749746581255500, 7611854515593],
    [16943947811135261185, 16152470009188707678, 28041718704053],
    [6745843108403216385, 13806790848493904003, 10165875627153],
    [12338229654069444609, 11981226523265951191, 21649748467631],
    [14358176069683511297, 5133628726077003713, 8111649503591],
    [7083775185760813057, 16183955741910833164, 14695278294570],
    [5350276357316149249, 13640425554331371454, 13866877333998],
    [9223372036854775809, 18108120906868035862, 12782739448950],
    [1, 6324011669895037184, 25718981643201],
    [1, 10444437689515769856, 19393342825359],
    [1, 12324712543665782784, 25487566194101],
    [1, 13928941951563857920, 17845668124005],
    [1, 3975288688270639104, 5477755089456],
    [1, 11141905478114607104, 29232215500831],
    [1, 4611686018427387904, 10271604003906],
    [1, 0, 21570250000000],
    [1, 0, 18048000000000],
    [14699116688460625613, 708211, 0],
    [6684126021499623500, 708211796840712, 0],
    [12614606079692508507, 4398362855256705725, 38392],
    [15358270276683001490, 2812083125569302717, 5624238435728],
    [18077126190953408996, 12868509142973100603, 28048152443331],
    [7864121581925945660, 8726243776748165726, 14787697603278],
    [3518026639210514840, 358304413426858117, 29390473050623],
    [4698310163811252281, 3180720351566429470, 14847019423721],
    [6101155398200416339, 14053818240400098784, 6121172427195],
    [16049178580360033342, 7340140541492429288, 25019761859013],
    [3167464649127375998, 1323571167904965058, 6597397909816],
    [12778923935480989905, 14463851737583396026, 4408071750936],
    [11875553912612980380, 15122784818916048486, 1304784086973],
    [10628760849351697058, 13557974621377508955, 10173819807807],
    [3408944711673234311, 17525172074563876264, 26687734979276],
    [2102091496050506179, 15148880683074215967, 6860950041481],
    [6254611118630245761, 6744828147558597936, 29577821222467],
    [2647941151989776369, 9799290779647971692, 30275365637866],
    [8855437735410157459, 11170890203898678105, 3818531220617],
    [10184270603132180104, 7068779781287527905, 27785605575171],
    [12079083162535627165, 14474741922505540911, 29187383199319],
    [5952952868716156730, 17107062680405191514, 1623784677331],
    [11958907037815852321, 2712598571300237005, 24531927375726],
    [10101562137321697627, 3767556054903418641, 8046147050263],
    [13633527411279258328, 18158239681706277628, 6935204239622],
    [16555627393501768729, 10531652712128330681, 6406984360145],
    [6359650463500280707, 9548395326934120567, 24785570922037],
    [8093923611102181968, 15875647850297719390, 32309517619547],
    [2848827352928635727, 8215825295203192574, 4443860620594],
    [4686723431961561512, 12747310908260543144, 21810445380781],
    [6245554925867652610, 77706528053613642, 27821691033109],
    [17527406820792516034, 6024737704056756146, 22037004212479],
    [12119966834653692211, 6819452388570089667, 22783326601685],
    [11606502845877928062, 13695926775373186254, 16853369683254],
    [424311496652297091, 3746531715392682132, 32054742457678],
    [5977664048034127174, 4717376233154528116, 7502203099891],
    [6702712461535947029, 385190957950313369, 6899255729478],
    [11384349854055020019, 12388374310648616082, 23878020881243],
    [3782955013294836189, 1078067332084407770, 23387671575117],
    [3531805968821207062, 3257295319358714850, 14925058442147],
    [3867566898657193229, 1545453099660723457, 931176578333],
    [12688734637425072081, 7495477664653506341, 32029083779180],
    [18435982764454619692, 7225503732673614354, 16492406330658],
    [4728836163964677693, 3935478326103643956, 21794391695342],
    [2120012917348838978, 10082240682742686210, 8174213342707],
    [9856965465824679832, 10838712705567897138, 9715546559362],
    [11217197671061248817, 2142546572501643680, 4994587567793],
    [3840562972677739190, 7893042119150331392, 9905116147682],
    [17104366978925258618, 12084811642251302615, 28642427882670],
    [16177877219841993445, 15317234482572954775, 19630655118951],
    [7338522384267208705, 2283226355108359361, 7783830348945],
    [10935240458612244481, 13359725152575722127, 25745123773948],
    [1732868046462124033, 13126551011491594557, 3580724232151],
    [557965042578882561, 3598021288691861269, 16343711591756],
    [10454684322475540481, 16462621795896662961, 11596195049124],
    [13907115649320091649, 14682112756964627332, 11940892440515],
    [1, 7174112100896070218, 30659795918927],
    [1, 5023109019590616064, 8271388909396],
    [1, 10765223023086141440, 8020272303285],
    [1, 8228137177297453056, 19637583583909],
    [1, 2891199497780592640, 6821446048210],
    [1, 15294857653247803392, 22994156732238],
    [1, 14303432416528695296, 16206829135894],
    [1, 0, 10262775390625],
    [1, 0, 24993000000000],
    [14876458284855834551, 10, 0],
    [10450704926982265199, 10806454419, 0],
    [5385653213018257807, 10806454419566533849, 0],
    [12735569669880147490, 17118225092618494573, 585819067],
    [3619762560577729457, 13385738875341807559, 25531927980841],
    [11123448126624084270, 8272682717439277193, 27433725642358],
    [4072715118852885634, 13402436483369350083, 18038448463028],
    [18239087231420827284, 10946328903241612536, 7348726547537],
    [423431461216085298, 16265808923426731252, 17489593401678],
    [9360976716520160043, 11080374459871185177, 334881771268],
    [11655927117263208921, 1240761893433831916, 20228600668303],
    [2646622721938364949, 367264070493390483, 8335067261837],
    [4496462484548171853, 2863675693461092905, 11149019909425],
    [13140258519803350064, 7511929581752138999, 3377155240170],
    [13089764333320627771, 11154557789993845753, 28906407222518],
    [6926286827289840502, 8325416539745948522, 23798604689789],
    [4985580225290866219, 17745129874679852617, 29053451321734],
    [10478790837359789694, 1074820986392253357, 16774961965418],
    [10041191967455692215, 7820952682162838597, 10602058266162],
    [5035461258013813798, 8215518006273528603, 13874423974694],
    [14208759661559249751, 9680426791089900133, 19238445364123],
    [12347272163241758841, 16128495723604797412, 13211524776987],
    [3372534174410277615, 2264789053583348885, 17435874327505],
    [17226704187274712985, 11175458488686298083, 31697122774460],
    [4250480179449852122, 11026777810412287617, 19900605822818],
    [4303723537755414375, 16199890034895598640, 30562597762822],
    [8680503847344854166, 9094320719494763752, 30470878197798],
    [8817608623911079653, 1250835564687222832, 30758493004114],
    [5692030448698539451, 15362466642459337025, 8530067807931],
    [16908836314686769810, 7831109835595423828, 24251832800985],
    [6073762347067727241, 15426237284335022429, 5849424525314],
    [10931066692585106201, 15636308361455434548, 30722836257998],
    [14466591364061539597, 13967173875944980328, 23758847645974],
    [4958077340960173342, 18245979923595824097, 6422757162012],
    [4076890037156765716, 11335054479675278263, 15388989116553],
    [14083973146609179059, 11165339882630461707, 20617614474534],
    [2565183738039805296, 15944437408299395922, 15654605274287],
    [1482420938751351225, 15806416348777321161, 15535864349683],
    [2151089495335413945, 4201030477408556248, 1011856867547],
    [3738604531753220914, 9485474942554588907, 219227738318],
    [14195686514836005766, 18238757647663230541, 20686514208626],
    [17808833916231796971, 4642199687824746379, 16242988725033],
    [1302384553035657355, 6134575894869364037, 13097251654149],
    [1672033517974833699, 11524208547121316008, 18949332556025],
    [11673925532927662546, 2734683241527878366, 22777624728597],
    [3905334232240480710, 10629223456178675171, 5141148247475],
    [17411087320267472626, 2788042336985254064, 9651576211358],
    [16573305231063706618, 17285498758066142502, 1950151140077],
    [15481103236037148355, 5525538192421886436, 25325937048765],
    [907440704754420881, 11414325503043801888, 15549299540025],
    [3224970785139077760, 7246608114685173259, 16441618771825],
    [10560826509734608145, 1007884269852184608, 12145392839413],
    [4700940027512659969, 13823717876510029312, 27381054637515],
    [9733694683502084097, 12487410768239429317, 1483749385247],
    [1995535635724632065, 3361062421598631942, 25631676943894],
    [10629833226245373953, 17853337379088328475, 19990182203558],
    [15729384648544878593, 11551561037491869885, 4262967831358],
    [7205759403792793601, 11480877996635204802, 27454626211378],
    [1, 5527488381934471912, 9778622379643],
    [1, 11143438404407726080, 13947299645745],
    [1, 6472279730688098304, 18737604087006],
    [1, 4561816853579563008, 19678350862987],
    [1, 2888714464062865408, 27275247296587],
    [1, 16258276129784201216, 8267156597524],
    [1, 720575940379279360, 11028881362915],
    [1, 0, 20451039062500],
    [1, 0, 10724000000000],
    [7535526066623007028, 164893, 0],
    [11302146918409311589, 164893408501686, 0],
    [2480833299122194802, 16409970870640346804, 8938],
    [11513226205589330559, 7721907286269370594, 8938889586303],
    [4073957068281936106, 14300743897882155131, 9855418605432],
    [3729887061093812887, 2068482633821123575, 8056775244880],
    [13616911779739451444, 4922882895416406094, 31824112132668],
    [13039053282195777667, 9317632875623428410, 8764266870016],
    [14490756113210417891, 5693844901999766254, 29952505109890],
    [17432486112977557586, 11569484900262102262, 23938308663950],
    [14308820825344039838, 3138170119352085637, 27278627183033],
    [4190949538817536350, 950584692575235243, 6585170120543],
    [13616552502810964398, 8136430299747162645, 20319051531299],
    [4898145803694965032, 6698711700804594470, 17443441076770],
    [1399036321001644309, 17401191571004302008, 27170363137888],
    [17170331128243738541, 4721732028538188150, 24416943320485],
    [10641321388205367411, 2984214103553086219, 11685255965606],
    [6648873641312572852, 13128675202005662068, 27558161774570],
    [5988456964560374824, 14638512997670672834, 30698711706908],
    [9972593758348346916, 12942085665769692438, 27932793555379],
    [16709668921872818969, 14131134357119205086, 18867701591869],
    [6094829131503407768, 8921946894736102919, 12093766050328],
    [4892016478899926335, 5601522560505809989, 8728483659710],
    [13150857244079031539, 8602606493507716808, 32702303659146],
    [12983943395318785895, 8576789731078566487, 25738466348232],
    [15341644584614757479, 17881118138842658549, 19656464948702],
    [7507635124856644773, 11624372674432704923, 24030969337356],
    [11619655367084544355, 6826284072848095635, 5644630158505],
    [11553116952478783010, 1646466632033733563, 27817370053601],
    [17392150014233193246, 17871081657060299180, 27617089255134],
    [8877887560294980516, 15910893124677544709, 30430968793277],
    [18404180619915609504, 11031217459450580944, 18621862531244],
    [10079413095288181977, 13554987390037243094, 20652598003496],
    [14102802966539105551, 15026714590903687870, 1832734817338],
    [13333966026135891400, 4406379654994689200, 31802814599830],
    [12344968670173516153, 13596329092861950242, 4758238870319],
    [10577007819804726753, 284812388227373260, 15151737058477],
    [15337041354031088011, 9285079159392309382, 13485015439710],
    [14333607285614673617, 15046108141952711893, 6494503345149],
    [17171597563219696539, 13795366909944958311, 7165815651156],
    [2849642930482147565, 12909920641180059961, 31572747848338],
    [14791248423979435174, 5333762939889788252, 2706699848200],
    [13882371364576310128, 6411331390005944495, 2568289143868],
    [11735995808941329541, 1447104583224217723, 19516347558971],
    [11376996674339273182, 11940049226167932871, 11323078447696],
    [9849638057168043482, 9772290783590472385, 4688647271365],
    [18241520229279361965, 16351989577831528444, 13253529756944],
    [1865852368526961445, 4376738725895725097, 25872886443131],
    [10601487369276448159, 13851276297739812763, 11387237263481],
    [15999931310312762171, 12641996203470333509, 26745750879192],
    [5773775867713013571, 7707081716407945022, 31704685323987],
    [17726239863982547535, 417638323657040024, 9939417801737],
    [9711316695888316993, 16438047707692449100, 9225022640218],
    [17872002620723724289, 14850108107043306316, 4186891108351],
    [7429694208660733953, 10423290807904720835, 16383805025973],
    [1782821038871019521, 16951162310302339314, 28341565047726],
    [3225250234313474049, 2752437506572397322, 17326918924350],
    [10009250171830927361, 3925815842962784589, 30782149209936],
    [1152921504606846977, 5274166674003605291, 12112212818903],
    [1, 5538963350863452832, 31703285913148],
    [1, 16900671634439028736, 22076300267804],
    [1, 2326997710751662080, 4380916187245],
    [1, 12327726161625874432, 109126146798],
    [1, 5756455743825903616, 23278668287374],
    [1, 3018537650245074944, 3470312058091],
    [1, 16717361816799281152, 11499163635253],
    [1, 0, 20021906250000],
    [1, 0, 6416000000000],
    [2285186318012886801, 2516073738, 0],
    [9706420951402272036, 2516073738123880198, 0],
    [2369632031840402143, 11997425759292732054, 136396630],
    [15599123897979399459, 11491152661270395161, 16214650381753],
    [17579576584023912659, 18181063258234881272, 26041622936633],
    [3480927339588501812, 2466921813123869732, 15417985597414],
    [3547346616671294636, 8430880678232179465, 32742133732099],
    [7705317123868384955, 6738034873677997533, 4867457038957],
    [4969425237478353910, 7678250951042929246, 14957365269602],
    [17043246700132217176, 1853560606315563193, 5218416238818],
    [17053788362783499471, 14942676593409905118, 8418100481721],
    [11102988228454224769, 4909892170837638183, 3769810044121],
    [16944305387801685840, 16871149368312132405, 17625266165787],
    [11725142977459199277, 16096130589333770811, 6171914586839],
    [8175984171998533325, 12512479187631824282, 19159872572987],
    [1372352885142856896, 16980304980540557310, 3643678302855],
    [17975093466502888165, 8640919162749295366, 8839920504177],
    [6467823391459085654, 7862382415464063513, 19825468425166],
    [11319386883146885026, 14534157903009925344, 17358426220604],
    [9141999262922068638, 12627464554215107944, 10300787898278],
    [1587330393383478775, 2456849734836299173, 14246684536225],
    [884187548095712304, 18428252197697827913, 11681133186090],
    [488841225726377269, 7244734215936736255, 19498998997553],
    [17462624199405856194, 14756175050504770087, 8753392737828],
    [13183677579115583555, 6764116534566945922, 24100799933852],
    [11645015818917277780, 1588822142405565521, 28060366683492],
    [8760523002035971978, 17053265624843842052, 15716086130220],
    [10068817678491468043, 16996891591759999207, 9772924459381],
    [1273658177787418285, 8565556232370585876, 22901921403339],
    [3100019384328057662, 14464960359145886620, 20939464339733],
    [10363063568089458739, 5813189542048784035, 28949784147072],
    [13030756371481403667, 9739241026882027025, 13440315133636],
    [6538878900684195300, 18175068535675302910, 3780527965313],
    [8984884716779098869, 10562697212061761911, 17537985272439],
    [8728727397070363909, 4264834835660801368, 23159572604963],
    [6398650562917867006, 13019066443690126316, 10275231197159],
    [1190873176164938880, 1828040177823321846, 26599705765006],
    [4383628525805121796, 11240369830376975668, 25742099098256],
    [10189374699734119853, 8886938465302549874, 10896609341669],
    [5276291920541626392, 9985240313589688325, 28901481761899],
    [2692252373800386522, 722909126956573766, 19563541300962],
    [11578684995169173921, 5493363474638452381, 1762039188982],
    [5799408022254132588, 12410535279213120491, 19958297795830],
    [15548569837712345291, 10543108918366869098, 7414672776465],
    [15763030464322902956, 12953909016524823995, 23825571543079],
    [13257749746581255501, 16505942145872588169, 30759702232814],
    [16152470009188707679, 12428594380392015797, 32494894788916],
    [13806790848493904004, 7528259605829768337, 12596673755451],
    [11981226523265951192, 18147447600042811311, 14651408107770],
    [5133628726077003714, 12021069431116183911, 18682983775105],
    [16183955741910833165, 11819985069665662506, 31617651663479],
    [13640425554331371455, 10401877114068152814, 25207640762674],
    [18108120906868035863, 4611631138117837942, 10546563886888],
    [6324011669895037185, 17200813398607252417, 12072249997024],
    [10444437689515769857, 14100466137553658767, 14048932457962],
    [12324712543665782785, 17887776768825509301, 28138764387800],
    [13928941951563857921, 12632656857970087269, 17880969698321],
    [3975288688270639105, 8923681664054686256, 23569684817700],
    [11141905478114607105, 6213926103737837599, 26404483753752],
    [4611686018427387905, 1233118281776157762, 26392336857609],
    [1, 30716279628678784, 31241066847476],
    [1, 15775734650898546688, 7412001665132],
    [1, 976806005729918976, 28780855204289],
    [1, 12460098853279891456, 6593052952759],
    [1, 5635665595421687808, 18615675463312],
    [1, 1805943450575568896, 9872305510044],
    [1, 11529215046068469760, 22172097900390],
    [1, 0, 28518625000000],
    [1, 0, 14912000000000],
    [4398362855256705726, 38392, 0],
    [2812083125569302718, 38392238435728, 0],
    [12868509142973100604, 4564018338575530435, 2081],
    [8726243776748165727, 16553437246451512014, 2081247415929],
    [358304413426858118, 4339777136957372927, 20089897363631],
    [3180720351566429471, 18439463366554654697, 10415235259789],
    [14053818240400098785, 1370067356680643003, 23949999605312],
    [7340140541492429289, 4210124040914115013, 1600074271500],
    [1323571167904965059, 10692225626142609720, 19212228231281],
    [14463851737583396027, 11592856673895384344, 113579626712],
    [15122784818916048487, 10284479231227406269, 4312628450019],
    [13557974621377508956, 4961071383534266431, 21219557522736],
    [17525172074563876265, 10960611551445686988, 15664268940218],
    [15148880683074215968, 14616396723115619209, 5050594175942],
    [6744828147558597937, 1025604265437492803, 11206792356454],
    [9799290779647971693, 11711588454892179178, 8806055598118],
    [11170890203898678106, 5580373263251565705, 22566634886482],
    [7068779781287527906, 14109334653033148931, 5458302512640],
    [14474741922505540912, 2899414033769399895, 11776764868564],
    [17107062680405191515, 13233457234892808147, 30676157177549],
    [2712598571300237006, 3287946691509034862, 7885717387154],
    [3767556054903418642, 5488480288717445911, 14226178239947],
    [18158239681706277629, 11687233053874362630, 28107297531112],
    [10531652712128330682, 6783772100089274577, 9448633566173],
    [9548395326934120568, 7898291058728402485, 989367749022],
    [15875647850297719391, 4423684977486598491, 18846428167216],
    [8215825295203192575, 2750833684599526706, 31792239808443],
    [12747310908260543145, 15669689830489025709, 4027149122992],
    [77706528053613643, 15117307274214954517, 32176849455587],
    [6024737704056756147, 8148639818575698175, 2531819510869],
    [6819452388570089668, 13006484426078994901, 23637441738649],
    [13695926775373186255, 10287496057845513526, 30617705082933],
    [3746531715392682133, 14159876032966532430, 28725557686278],
    [4717376233154528117, 15742212196465548019, 28678767608417],
    [385190957950313370, 2892220461917134150, 609853387033],
    [12388374310648616083, 7487151560715393883, 12569156787585],
    [1078067332084407771, 7245756744165177933, 7553405879299],
    [3257295319358714851, 3067122860671533987, 1027392793260],
    [1545453099660723458, 8135043905834122525, 27308166269063],
    [7495477664653506342, 14730019368921022572, 18567441001613],
    [7225503732673614355, 495969939682055458, 11405798515950],
    [3935478326103643957, 5617761407265775598, 9454026886584],
    [10082240682742686211, 2087044847072781811, 3512304539456],
    [10838712705567897139, 15929674232061203330, 5952113138927],
    [2142546572501643681, 8658086469608285873, 23791863549370],
    [7893042119150331393, 18369871790780313570, 19898469355807],
    [12084811642251302616, 3545648451947416750, 4383995832745],
    [15317234482572954776, 13347376792767929959, 10665192209987],
    [2283226355108359362, 14482164459838203025, 15939723562745],
    [13359725152575722128, 8899577765623565820, 3833785079708],
    [13126551011491594558, 7095320096604405719, 22428482447077],
    [3598021288691861270, 2968593824439315788, 9957384638073],
    [16462621795896662962, 12621408323612585636, 20089160927793],
    [14682112756964627333, 3954422936414648259, 2609684207916],
    [7174112100896070219, 17143730087577690191, 22828214369696],
    [5023109019590616065, 5033045529399041876, 15776929363470],
    [10765223023086141441, 15857648521994521781, 13838272841944],
    [8228137177297453057, 16655573486499109541, 18648859644848],
    [2891199497780592641, 16652154439190075858, 5040902900447],
    [15294857653247803393, 18016950600164130638, 2783902715100],
    [14303432416528695297, 2086292996072613910, 19676976700849],
    [1, 17324462585194799521, 23985113098169],
    [1, 11079151463184927232, 26553939160998],
    [1, 5239846817488961536, 28582600602004],
    [1, 2778806963520143360, 29076284052665],
    [1, 6240890740138835968, 5305150639427],
    [1, 17250651344549707776, 3395338319364],
    [1, 4197354852709302272, 13828935159683],
    [1, 9223372036854775808, 3971227539062],
    [1, 0, 22134500000000],
    [17118225092618494574, 585819067, 0],
    [13385738875341807560, 585819067927980841, 0],
    [8272682717439277194, 5654803392547571318, 31757315],
    [13402436483369350084, 2931628102185393332, 5123306547506],
    [10946328903241612537, 15964697617980212305, 26930158923877],
    [16265808923426731253, 450380868305846606, 28773865447992],
    [11080374459871185178, 14631133530814566148, 25144024415195],
    [1240761893433831917, 31969822783742095, 15323793155338],
    [367264070493390484, 10437269029385743245, 25866001733087],
    [2863675693461092906, 15196146496377392433, 21983565805487],
    [7511929581752139000, 4409099735137480938, 30639823784752],
    [11154557789993845754, 10644987914903248118, 2864239017775],
    [8325416539745948523, 3154431617534062973, 32559577065951],
    [17745129874679852618, 11702056331247960454, 27103171002080],
    [1074820986392253358, 15575315065965259114, 16096634369744],
    [7820952682162838598, 10759747609480050226, 30416844339521],
    [8215518006273528604, 12538236653960743718, 14657583287086],
    [9680426791089900134, 17857942663978005403, 2862679699170],
    [16128495723604797413, 11443004154750813211, 12002968081011],
    [2264789053583348886, 4004313188770806737, 4723620326498],
    [11175458488686298084, 17134872954824183228, 11362217074252],
    [11026777810412287618, 2659553912986171234, 7756928883324],
    [16199890034895598641, 9501854300969137926, 6780144174706],
    [9094320719494763753, 14528169966301018150, 18034515096553],
    [1250835564687222833, 18172091996515901778, 13289787573671],
    [15362466642459337026, 1133541705604751035, 17831985111081],
    [7831109835595423829, 18280349987988641497, 24617061449418],
    [15426237284335022430, 9936015874712336386, 32458990979758],
    [15636308361455434549, 15876720399740689614, 2734538632499],
    [13967173875944980329, 8618117825152456982, 11571860678737],
    [18245979923595824098, 8085525680745921564, 10321467189103],
    [11335054479675278264, 8072355444669730953, 10095438317225],
    [11165339882630461708, 9395030504766848294, 18089437603265],
    [15944437408299395923, 3537903114058185903, 9665509305624],
    [15806416348777321162, 2126094743961928691, 11544191790112],
    [4201030477408556249, 289185362555601115, 27680115255827],
    [9485474942554588908, 16909937501450129614, 27155015676769],
    [18238757647663230542, 14449642060360499058, 13153916689548],
    [4642199687824746380, 12433818908498244393, 7308783316665],
    [6134575894869364038, 11884444034578008581, 28345674038673],
    [11524208547121316009, 988625838444140793, 32145644257002],
    [2734683241527878367, 1675370907158909973, 32490053593514],
    [10629223456178675172, 15920186275316934067, 27050090822038],
    [2788042336985254065, 5600921198503757726, 31126863035027],
    [17285498758066142503, 10457357161776341741, 14995303626546],
    [5525538192421886437, 12225356765775740093, 30514566894467],
    [11414325503043801889, 4486633318598164537, 4995662737918],
    [7246608114685173260, 10302486602879381361, 29182243220879],
    [1007884269852184609, 15536428611301239541, 11663558498917],
    [13823717876510029313, 12026126645955462603, 23141842231482],
    [12487410768239429318, 14877968141142123551, 8378651937631],
    [3361062421598631943, 734560801645383190, 2911806536269],
    [17853337379088328476, 15648943144911081638, 14925039820620],
    [11551561037491869886, 13664182862003235646, 24396848330907],
    [11480877996635204803, 3895127525902132786, 30875740736837],
    [5527488381934471913, 5249187334214137467, 3397211155286],
    [11143438404407726081, 10642260063359027505, 27478284559015],
    [6472279730688098305, 783598951897779422, 25255576918074],
    [4561816853579563009, 5538576558607624843, 22586042478984],
    [2888714464062865409, 15974581187564609611, 29064300246836],
    [16258276129784201217, 7474269406918257428, 14132865983781],
    [720575940379279361, 8045286838779138019, 25893405180956],
    [1, 8184246376556341732, 17436436135873],
    [1, 1493267152679331840, 32705443668885],
    [1, 10179074811222818816, 9109080950174],
    [1, 3892499202005008384, 17822551808751],
    [1, 10341173215925108736, 6895211012804],
    [1, 6230307872002015232, 25284560596123],
    [1, 9295429630892703744, 11419337745666],
    [1, 0, 25858503906250],
    [1, 0, 5066000000000],
    [16409970870640346805, 8938, 0],
    [7721907286269370595, 8938889586303, 0],
    [14300743897882155132, 10665454627995623288, 484],
    [2068482633821123576, 16803537892767562832, 484578175453],
    [4922882895416406095, 8099123106849104444, 10717910921614],
    [9317632875623428411, 7077413686679401728, 29070439054343],
    [5693844901999766255, 13536636358372449666, 31751383667364],
    [11569484900262102263, 7280632235418610318, 21156733822527],
    [3138170119352085638, 6187823673116858809, 9791394683864],
    [950584692575235244, 8624343686231740255, 7128335442593],
    [8136430299747162646, 806211610822132771, 25249467526608],
    [6698711700804594471, 18388078233202190882, 28112043704818],
    [17401191571004302009, 7628864426595573600, 498996819718],
    [4721732028538188151, 4530799784343874981, 14086413561569],
    [2984214103553086220, 8561580552078486438, 12001245615148],
    [13128675202005662069, 13349114951221999594, 21548464124211],
    [14638512997670672835, 10029144738508991772, 12595723656971],
    [12942085665769692439, 12601907197916268979, 24331543681025],
    [14131134357119205087, 1329580921391066941, 6145683150758],
    [8921946894736102920, 3198179786356761112, 22438072076726],
    [5601522560505809990, 11406753413634654142, 18870173373673],
    [8602606493507716809, 11131812960525182090, 5353618361341],
    [8576789731078566488, 14299636753645227208, 19453603456789],
    [17881118138842658550, 12964114684643663326, 10005775184861],
    [11624372674432704924, 5019257593846306316, 29661702786065],
    [6826284072848095636, 6929086798159998121, 3089272094499],
    [1646466632033733564, 18359765766933703649, 16163375626547],
    [17871081657060299181, 9993076234752063198, 14643995284896],
    [15910893124677544710, 3257189215046584509, 5536541725748],
    [11031217459450580945, 2905234736672690348, 21556176572581],
    [13554987390037243095, 12064985302079670056, 20645157493090],
    [15026714590903687871, 14315096064942799930, 22882654044163],
    [4406379654994689201, 11943971043551974038, 16387776022912],
    [13596329092861950243, 12472773152119929647, 2432647483967],
    [284812388227373261, 7791259796982183085, 21055676150387],
    [9285079159392309383, 16866829442051086686, 29299422365039],
    [15046108141952711894, 3702498393844653053, 1391914352656],
    [13795366909944958312, 2057239613841701716, 16200712840],
    [12909920641180059962, 17201969976738286226, 17032111523182],
    [5333762939889788253, 18271566505443461640, 1390932520660],
    [6411331390005944496, 18368509115417119804, 28372990503604],
    [1447104583224217724, 7613923684154518587, 10932995758874],
    [11940049226167932872, 17984805084714865232, 6938412751629],
    [9772290783590472386, 4220802739051410373, 6925974958237],
    [16351989577831528445, 17812459042810815760, 28829228810174],
    [4376738725895725098, 10629526089664605307, 16318965615339],
    [13851276297739812764, 17437443267816548473, 2795576227763],
    [12641996203470333510, 12506371893701049304, 30643945285693],
    [7707081716407945023, 15737221540003030739, 10301677971778],
    [417638323657040025, 2358380859011605513, 10562853116489],
    [16438047707692449101, 10042972713837039706, 6729127848082],
    [14850108107043306317, 13424397272769642495, 26770544430641],
    [10423290807904720836, 6867102315755663029, 3633727738034],
    [16951162310302339315, 8690748404825506734, 4274372266362],
    [2752437506572397323, 956229930815387710, 18810471126415],
    [3925815842962784590, 7734449506297687888, 5519051837328],
    [5274166674003605292, 16332184961683848151, 20368419285347],
    [5538963350863452833, 15580777817612768828, 26979885369520],
    [16900671634439028737, 17404245271944696092, 18608844635657],
    [2326997710751662081, 13201420160494469229, 32265943486026],
    [12327726161625874433, 16511717657124068078, 3658715650420],
    [5756455743825903617, 14131292492116594062, 22900895102007],
    [3018537650245074945, 18429136031865875691, 13367766058900],
    [16717361816799281153, 2563978348305862197, 1940999045466],
    [1, 14239974392147482896, 346138993544],
    [1, 11164201396098998272, 25480771950558],
    [1, 7116971104932986880, 22494605212570],
    [1, 12437629862867369984, 31642385811776],
    [1, 16501893821638901760, 2368674245265],
    [1, 10649324268870959104, 10897894569456],
    [1, 7205759403792793600, 30192577301025],
    [1, 0, 18977390625000],
    [1, 0, 232000000000],
    [11997425759292732055, 136396630, 0],
    [11491152661270395162, 136396630650381753, 0],
    [18181063258234881273, 3016823727048309817, 7394076],
    [2466921813123869733, 17405973192644624358, 21276163542341],
    [8430880678232179466, 8937219978302591747, 3397943579697],
    [6738034873677997534, 15178463196824222317, 21553484487665],
    [7678250951042929247, 11979404627460330594, 23537822826138],
    [1853560606315563194, 2006448052689740002, 32410649404826],
    [14942676593409905119, 16330465320863239865, 9626108769766],
    [4909892170837638184, 17136208883957646553, 13798885276298],
    [16871149368312132406, 140455118208931867, 14986928955745],
    [16096130589333770812, 3964972929179372247, 8545007614087],
    [12512479187631824283, 3378050330022776379, 14471214941613],
    [16980304980540557311, 6065353437512901255, 17837183124475],
    [8640919162749295367, 12768753059854699889, 17403328803468],
    [7862382415464063514, 6848720690951013326, 12940692195490],
    [14534157903009925345, 10953228058585475132, 2210371269892],
    [12627464554215107945, 15539127852083296166, 29956593775682],
    [2456849734836299174, 14534853647735598497, 29762842377808],
    [18428252197697827914, 1506909603576368170, 15952787935995],
    [7244734215936736256, 5475702579938239025, 4859081689733],
    [14756175050504770088, 12039747373985783332, 2693296838431],
    [6764116534566945923, 17572399137760898460, 22303652676012],
    [1588822142405565522, 869552790852091236, 428952601666],
    [17053265624843842053, 4549585778048181804, 17474047138551],
    [16996891591759999208, 4121918231767210357, 23287246633539],
    [8565556232370585877, 1558397953312543179, 14915223449635],
    [14464960359145886621, 6067524298738069781, 28707084480922],
    [5813189542048784036, 5811095224555517056, 12698328921151],
    [9739241026882027026, 6440894514158997188, 29759315020103],
    [18175068535675302911, 4612748874388784257, 2375349161591],
    [10562697212061761912, 9908101430749813367, 20087250057617],
    [4264834835660801369, 15150017990912190499, 31121537119254],
    [13019066443690126317, 17470426264690059239, 13334821284120],
    [1828040177823321847, 9615161096851907726, 10520947073705],
    [11240369830376975669, 9227932132124142224, 8873521238927],
    [8886938465302549875, 4794113194321211621, 21391500247203],
    [9985240313589688326, 391512698859146347, 163259889397],
    [722909126956573767, 17209658878068655842, 14069021223945],
    [5493363474638452382, 3077364726606876150, 11273932937477],
    [12410535279213120492, 1952989567673965814, 6405166824276],
    [10543108918366869099, 11172860676923186449, 31572105871776],
    [12953909016524823996, 17338078544784947239, 16800605681990],
    [16505942145872588170, 4593380466519703278, 14662939899121],
    [12428594380392015798, 786884753602720052, 29937249007654],
    [7528259605829768338, 17848875822468020539, 14374042657107],
    [18147447600042811312, 2899664567187130618, 24915967589497],
    [12021069431116183912, 2973178834961857409, 15481157191131],
    [11819985069665662507, 11117453141176836727, 1499161176347],
    [10401877114068152815, 7535238370146462002, 10523602678342],
    [4611631138117837943, 10246175467290865448, 29254408486090],
    [17200813398607252418, 1203128834127050464, 15562555446285],
    [14100466137553658768, 14518048959078919658, 21517065221744],
    [17887776768825509302, 1553474987376920024, 30320787025011],
    [12632656857970087270, 14956572380830948369, 27763084214047],
    [8923681664054686257, 7594162606042048292, 16159810797413],
    [6213926103737837600, 14461296147288811288, 16229411680379],
    [1233118281776157763, 18305427728131488265, 28795783948434],
    [30716279628678785, 10253208939347909876, 10386992339225],
    [15775734650898546689, 6446028915490812012, 6425555827570],
    [976806005729918977, 12986063676957432257, 31602349439927],
    [12460098853279891457, 9769714697972762807, 31671703975922],
    [5635665595421687809, 97429465146664592, 14322529617295],
    [1805943450575568897, 16395571728207795868, 17807005281661],
    [11529215046068469761, 6331668478323650406, 28029888805724],
    [1, 18129911846294207040, 15196343240435],
    [1, 9890094564876124160, 1779982824490],
    [1, 12290856656987750400, 29738536143100],
    [1, 8498454992640802816, 2300666288674],
    [1, 5341660584200896512, 6690460702168],
    [1, 9288674231451648000, 5592289572000],
    [1, 1152921504606846976, 29856503540039],
    [1, 0, 10567062500000],
    [1, 0, 12960000000000],
    [4564018338575530436, 2081, 0],
    [16553437246451512015, 2081247415929, 0],
    [4339777136957372928, 15212079674427582639, 112],
    [18439463366554654698, 10179808126814248333, 112824648491],
    [1370067356680643004, 6066766544199222848, 811551848504],
    [4210124040914115014, 6625308131806923532, 30776328880073],
    [10692225626142609721, 9122786786400665713, 32713359158673],
    [11592856673895384345, 11932880778639151320, 28049494547262],
    [10284479231227406270, 3884040911779255011, 6974646882763],
    [4961071383534266432, 13441817515637357872, 4555210554279],
    [10960611551445686989, 11628577856022352826, 31655728682387],
    [14616396723115619210, 13296656925520243654, 5523630386468],
    [1025604265437492804, 5020720704545399398, 27940720813216],
    [11711588454892179179, 14121973606499014694, 9376272173814],
    [5580373263251565706, 3642481034345420114, 19190765553723],
    [14109334653033148932, 9845536238569696768, 2107197459292],
    [2899414033769399896, 17655403572195686356, 2908533727588],
    [13233457234892808148, 8377495365136654029, 8548957101345],
    [3287946691509034863, 13713682649609025426, 7457454144933],
    [5488480288717445912, 1367709905452854731, 15781743420226],
    [11687233053874362631, 9981467701727208680, 25410074143702],
    [6783772100089274578, 6277920117543306205, 27606541096448],
    [7898291058728402486, 9344111460418701726, 22016340326731],
    [4423684977486598492, 4918507011364617264, 31051506545297],
    [2750833684599526707, 6554777203830755259, 29329266632799],
    [15669689830489025710, 4198262173120265648, 26719355335184],
    [15117307274214954518, 8080325935698446819, 29200227588248],
    [8148639818575698176, 12797633874200091733, 22680438035346],
    [13006484426078994902, 8376502502208665497, 21394693761122],
    [10287496057845513527, 9891973386793349173, 10338454091110],
    [14159876032966532431, 14877430279003795462, 13670536244951],
    [15742212196465548020, 8759933935842067041, 28375806507111],
    [2892220461917134151, 3753418510388703513, 30823474876970],
    [7487151560715393884, 2961383332545305985, 21034203473225],
    [7245756744165177934, 2497674184068629507, 25929160536912],
    [3067122860671533988, 15244544070742305452, 13136135399188],
    [8135043905834122526, 45953573565810823, 10004826408390],
    [14730019368921022573, 3960077421351906445, 17862002491148],
    [495969939682055459, 3173330011013883118, 16140214676227],
    [5617761407265775599, 11026266219545759160, 11011172026564],
    [2087044847072781812, 8886757764964685632, 18628597735089],
    [15929674232061203331, 13952322129918090479, 24241481752103],
    [8658086469608285874, 4127250666614902202, 7719756356898],
    [18369871790780313571, 17649958504065306911, 23842223738706],
    [3545648451947416751, 13269305359002216873, 20306956806167],
    [13347376792767929960, 16236593433831947843, 26647719330484],
    [14482164459838203026, 13580930396682424057, 17076880187493],
    [8899577765623565821, 421976357197961116, 8293736223712],
    [7095320096604405720, 2962130818798626533, 5088022875384],
    [2968593824439315789, 8234383947306356345, 19704160577433],
    [12621408323612585637, 4380469931801381425, 26521446386848],
    [3954422936414648260, 15279887469027055916, 3232237465750],
    [17143730087577690192, 8534542821713755552, 12438828324359],
    [5033045529399041877, 7814613482565088782, 5639462658493],
    [15857648521994521782, 13771954404705323224, 8637423631045],
    [16655573486499109542, 4568173274762548144, 15045746579144],
    [16652154439190075859, 8105292616250821343, 22216247641169],
    [18016950600164130639, 2923678426777275612, 1105439388793],
    [2086292996072613911, 1808633176918384049, 29817158492925],
    [17324462585194799522, 18118642609460438969, 25341098046200],
    [11079151463184927233, 18138164175864360870, 13048982213583],
    [5239846817488961537, 4031433690465792404, 5071983271850],
    [2778806963520143361, 5012226396942308537, 24490218544458],
    [6240890740138835969, 7889712298793536835, 23882271713337],
    [17250651344549707777, 13500762396543628804, 26681427702160],
    [4197354852709302273, 501020624068841347, 12688731877796],
    [9223372036854775809, 8370653768288261750, 12708027160382],
    [1, 647579990023635200, 22334453774050],
    [1, 11106569307181154304, 30434035105381],
    [1, 10797461613892861952, 32357602088328],
    [1, 17627230675448889344, 21896585331566],
    [1, 12197735707942322176, 17262955574089],
    [1, 12871287735024877568, 13129661240577],
    [1, 4611686018427387904, 21761697753906],
    [1, 0, 11058250000000],
    [1, 0, 9856000000000],
    [5654803392547571319, 31757315, 0],
    [2931628102185393333, 31757315306547506, 0],
    [15964697617980212306, 9451803574512021605, 1721567],
    [450380868305846607, 8662766454758138424, 17631512383298],
    [14631133530814566149, 9207992007314947035, 20290469609510],
    [31969822783742096, 17118602861291201802, 16422499166246],
    [10437269029385743246, 11186560605745599967, 10278928001320],
    [15196146496377392434, 10505549821532796847, 10536606424665],
    [4409099735137480939, 18133667530488679216, 24153569506996],
    [10644987914903248119, 10778135771244330799, 14004983028086],
    [3154431617534062974, 17087985777033767391, 22902584283910],
    [11702056331247960455, 2639185991757283040, 4870926341565],
    [15575315065965259115, 5401720287293896400, 5565143070559],
    [10759747609480050227, 9816495392633895233, 14175292827843],
    [12538236653960743719, 10042051500090034990, 10435532153281],
    [17857942663978005404, 11629689537856384738, 25025544380702],
    [11443004154750813212, 2099086731766010483, 24862630446733],
    [4004313188770806738, 13665537898516458594, 1677113791719],
    [17134872954824183229, 16375672064669490764, 5351740810293],
    [2659553912986171235, 7770550512184564348, 9269887726961],
    [9501854300969137927, 6197048880720627314, 30065421242387],
    [14528169966301018151, 17963594118523106281, 20499335942692],
    [18172091996515901779, 8255454642407818663, 4644973808388],
    [1133541705604751036, 16744201957549498409, 2820447529092],
    [18280349987988641498, 17442505417202859722, 26756907705006],
    [9936015874712336387, 6383975767786687150, 8878945560113],
    [15876720399740689615, 15245442964998335795, 26161346076019],
    [8618117825152456983, 2910016124519524433, 23923826457119],
    [8085525680745921565, 3847913871169988463, 31263157752290],
    [8072355444669730954, 17210451512590059177, 4578208595828],
    [9395030504766848295, 17899408909991454145, 16244932980445],
    [3537903114058185904, 5920601932753251608, 11997970328901],
    [2126094743961928692, 16521781895108979744, 27973320956473],
    [289185362555601116, 3697493405554698771, 23097895647591],
    [16909937501450129615, 2816108280295732065, 31079200441519],
    [14449642060360499059, 14251078772056398988, 17583152661535],
    [12433818908498244394, 4543066550096031417, 1055772552528],
    [11884444034578008582, 3099369389734296977, 11600246280131],
    [988625838444140794, 5243484113636490986, 4035168017151],
    [1675370907158909974, 6823370511605197226, 6911284249843],
    [15920186275316934068, 11396290277624641942, 1267369895656],
    [5600921198503757727, 15934361408437566099, 26344617794133],
    [10457357161776341742, 14939272230935131954, 23125863803462],
    [12225356765775740094, 7500666177940329347, 10822809859570],
    [4486633318598164538, 4806714453065462270, 13810406611928],
    [10302486602879381362, 11557851247268441487, 23512260572512],
    [15536428611301239542, 10655523157206817381, 30048626552371],
    [12026126645955462604, 14769600176490881210, 11827577637067],
    [14877968141142123552, 16688495540925795167, 18635800661629],
    [734560801645383191, 909793965395524173, 20093904685156],
    [15648943144911081639, 12724590949761703756, 2148049320029],
    [13664182862003235647, 10810739657314826395, 30813689801457],
    [3895127525902132787, 2431218615388671301, 27377586051371],
    [5249187334214137468, 4235001167959059286, 6443131796625],
    [10642260063359027506, 6253317787396334247, 31889229579873],
    [783598951897779423, 9534525563070371898, 1633338993036],
    [5538576558607624844, 8392783992374030728, 10636516867666],
    [15974581187564609612, 16356257019231647540, 15954454973731],
    [7474269406918257429, 12896334001521091877, 3363886674469],
    [8045286838779138020, 1427636373320877084, 12837699111667],
    [8184246376556341733, 16116755731295043521, 19187077392322],
    [1493267152679331841, 15945633911163986837, 10178873691078],
    [10179074811222818817, 7510154241072743838, 3014864414546],
    [3892499202005008385, 3571560509790395119, 10066407126277],
    [10341173215925108737, 3576991649007035076, 29957193614683],
    [6230307872002015233, 15509961892750732443, 17755193909105],
    [9295429630892703745, 17789791359353349378, 8049840796718],
    [1, 18331227331079738314, 13358964386521],
    [1, 15386712883100476416, 10969993737824],
    [1, 14082462055028752384, 30304834115376],
    [1, 12919043128765186048, 22320763411797],
    [1, 6125373368465096704, 7509700342731],
    [1, 12335992698065387520, 29643332057155],
    [1, 2774217370460225536, 30787668735504],
    [1, 0, 30224150390625],
    [1, 0, 26465000000000],
    [10665454627995623289, 484, 0],
    [16803537892767562833, 484578175453, 0],
    [8099123106849104445, 4962829537462579598, 26],
    [7077413686679401729, 5711259460785241095, 26269035528],
    [13536636358372449667, 13845894607204897444, 11272309607995],
    [7280632235418610319, 12116633056637003327, 3643750587450],
    [6187823673116858810, 2965791047992089560, 7226656843994],
    [8624343686231740256, 16021997451315962529, 26842160775854],
    [806211610822132772, 3942052271663803856, 17070868554222],
    [18388078233202190883, 15669876414782439922, 25070213699081],
    [7628864426595573601, 10594415915406145286, 5641849465702],
    [4530799784343874982, 10789820553031921377, 27494574324437],
    [8561580552078486439, 3989990218583987244, 31445584917344],
    [13349114951221999595, 2937341169808224563, 13152216297803],
    [10029144738508991773, 16267436558584536843, 12619159233583],
    [12601907197916268980, 16221580362814625793, 25647881859502],
    [1329580921391066942, 9695437602320209830, 12718879373633],
    [3198179786356761113, 10729753156793715126, 31041525590725],
    [11406753413634654143, 2609241432056861929, 10949581661084],
    [11131812960525182091, 8462663743997037565, 25500141447261],
    [14299636753645227209, 14993422143908194069, 26717458761920],
    [12964114684643663327, 1307443894537745373, 2240812795043],
    [5019257593846306317, 10017257439419829265, 17571070876675],
    [6929086798159998122, 16754772009970777891, 7171543036613],
    [18359765766933703650, 11722573031602862387, 29381908278010],
    [9993076234752063199, 7363764277467092384, 11002635481957],
    [3257189215046584510, 6733958494847390772, 29541399190461],
    [2905234736672690349, 8799796600227451045, 23485365048621],
    [12064985302079670057, 10512023194742249826, 21805477037929],
    [14315096064942799931, 4572542132337197059, 1897569857919],
    [11943971043551974039, 12600500455757416832, 12671247878005],
    [12472773152119929648, 7873789864743195199, 1909683074498],
    [7791259796982183086, 15724851676325671539, 13762426839003],
    [16866829442051086687, 8748017220462413167, 8155852445917],
    [3702498393844653054, 14172589522760466448, 6365474230963],
    [2057239613841701717, 9520545591489413768, 4787768297617],
    [17201969976738286227, 12488551088392570222, 2193516109810],
    [18271566505443461641, 1135798823651241684, 8178677005711],
    [18368509115417119805, 11168725610120161972, 15759061571777],
    [7613923684154518588, 9580104948718508826, 22721605457828],
    [17984805084714865233, 16638722716909738765, 22436519338529],
    [4220802739051410374, 15732724012348272797, 25121901986965],
    [17812459042810815761, 12269722190021214142, 17557852872677],
    [10629526089664605308, 13110655916311972587, 24549665142972],
    [17437443267816548474, 6618112997062866867, 30908710730081],
    [12506371893701049305, 8457936459015989309, 14689358768624],
    [15737221540003030740, 3329167139937134914, 27120458505654],
    [2358380859011605514, 5245511557216705097, 7606180474512],
    [10042972713837039707, 5655931353280440466, 28304284359751],
    [13424397272769642496, 604622132328697393, 7239306608653],
    [6867102315755663030, 8673282619234652338, 13032776631],
    [8690748404825506735, 16929477433058445690, 25527470179592],
    [956229930815387711, 11036952409253549455, 17672917748810],
    [7734449506297687889, 18199392190170386320, 3146598314388],
    [16332184961683848152, 9683116091880335715, 29076986591027],
    [15580777817612768829, 2993913337608915120, 30515524922775],
    [17404245271944696093, 4490779842162392585, 28055162300367],
    [13201420160494469230, 946849923353644618, 10191243445663],
    [16511717657124068079, 3613491058474899828, 1439051328837],
    [14131292492116594063, 14624054199004410935, 11589195887742],
    [18429136031865875692, 12088470271991908244, 29822792771566],
    [2563978348305862198, 10071980927725011290, 10222655317286],
    [14239974392147482897, 2833441711428854664, 9510546003180],
    [11164201396098998273, 17655572411864340446, 21740153601182],
    [7116971104932986881, 4997642792058747802, 31902957110498],
    [12437629862867369985, 11489200787635734848, 1250270922758],
    [16501893821638901761, 12983586226429536913, 18438622830822],
    [10649324268870959105, 12311150768725063152, 24806703841619],
    [7205759403792793601, 8530052476845967905, 16723667388820],
    [1, 6282736361499820264, 2452462415071],
    [1, 11337164765929082880, 11487340587820],
    [1, 8343856200414134272, 27436614588933],
    [1, 17889330377156198400, 6661452321350],
    [1, 17730714064155312128, 21062969782542],
    [1, 7449235258647511040, 28942961183935],
    [1, 9943947977234055168, 3263403823852],
    [1, 0, 4844539062500],
    [1, 0, 10468000000000],
    [3016823727048309818, 7394076, 0],
    [17405973192644624359, 7394076163542341, 0],
    [8937219978302591748, 12396245121240683569, 400833],
    [15178463196824222318, 10248996648596888561, 7617672001794],
    [11979404627460330595, 11257495103713935002, 14594555599221],
    [2006448052689740003, 7555396579247433114, 22901610270032],
    [16330465320863239866, 4805022328730367462, 19792409578869],
    [17136208883957646554, 7056637817080232586, 19829260480782],
    [140455118208931868, 10811411483818434913, 28942382541102],
    [3964972929179372248, 16962406704495245447, 10542586087790],
    [3378050330022776380, 18074517319117194669, 18798919533909],
    [6065353437512901256, 3702019776117654523, 17749979821547],
    [12768753059854699890, 3551977551381082764, 30187200686894],
    [6848720690951013327, 16442608985936005282, 11054192553088],
    [10953228058585475133, 3580046275479139588, 27776891355619],
    [15539127852083296167, 8737412692712715330, 483194074697],
    [14534853647735598498, 3082033243045084752, 30281473656091],
    [1506909603576368171, 16401023756841128699, 1307167077356],
    [5475702579938239026, 7520296082779572869, 13292889101279],
    [12039747373985783333, 9854104766152464159, 21471407676067],
    [17572399137760898461, 14169188802648310188, 6819534192089],
    [869552790852091237, 2018609909210367042, 15833768113264],
    [4549585778048181805, 8270271948267674359, 13424109429062],
    [4121918231767210358, 12320338602894572099, 8518448332340],
    [1558397953312543180, 17538536685990080547, 15924667886893],
    [6067524298738069782, 15833914616956760474, 11565950765978],
    [5811095224555517057, 6137696141415969855, 2970858358231],
    [6440894514158997189, 9757490468419438919, 1495332725174],
    [4612748874388784258, 3566639201356598903, 8630528954618],
    [9908101430749813368, 9760900035773954449, 20730193347898],
    [15150017990912190500, 3873778773990716438, 1338529139451],
    [17470426264690059240, 2295668377270167832, 19195209997968],
    [9615161096851907727, 1791721710912807593, 24208124448432],
    [9227932132124142225, 10571009006922683279, 3760097129428],
    [4794113194321211622, 9840791932778184867, 29652573055546],
    [391512698859146348, 11525464956561274613, 27194533470399],
    [17209658878068655843, 4435781488897895433, 24767624796707],
    [3077364726606876151, 6395563367070996741, 23075240464196],
    [1952989567673965815, 15538690795135662932, 20292346704184],
    [11172860676923186450, 16294558813563371936, 28984842354115],
    [17338078544784947240, 4942096228426070342, 32195883329803],
    [4593380466519703279, 6910116424372647153, 26891267911573],
    [786884753602720053, 17923400669760829478, 12181374598161],
    [17848875822468020540, 4134686917293039955, 31761971629497],
    [2899664567187130619, 16857102463116098681, 19897224141826],
    [2973178834961857410, 11364321508775167451, 7170913825355],
    [11117453141176836728, 7966947780972783899, 29259616061103],
    [7535238370146462003, 11261055695926686278, 1711431889104],
    [10246175467290865449, 9227040437353594058, 12496610463052],
    [1203128834127050465, 7185344074282882061, 3404500198864],
    [14518048959078919659, 14197856148610578032, 26064389518282],
    [1553474987376920025, 885688687260429427, 13258769667324],
    [14956572380830948370, 17407816160380305183, 5372048013279],
    [7594162606042048293, 17812728703806357349, 30687943679604],
    [14461296147288811289, 17120198191964319867, 24180965629957],
    [18305427728131488266, 12091952048375408786, 24581928087803],
    [10253208939347909877, 405056939269888281, 28923655506034],
    [6446028915490812013, 12485440679452408690, 18546021958180],
    [12986063676957432258, 8394369900823444407, 548676837095],
    [9769714697972762808, 2877421667354294258, 7911455059704],
    [97429465146664593, 2676980714750756239, 28408155985341],
    [16395571728207795869, 6119309228579057021, 21949145119415],
    [6331668478323650407, 18203256146533333852, 31415331728417],
    [18129911846294207041, 351919978865493747, 11297986800493],
    [9890094564876124161, 5190010931882390570, 27501019077620],
    [12290856656987750401, 6982466386088036604, 7156281351056],
    [8498454992640802817, 4707293888784996898, 7056378520261],
    [5341660584200896513, 690306801165964760, 25285255182913],
    [9288674231451648001, 12456770961278956704, 14913037421606],
    [1152921504606846977, 16946092489294063943, 19494675282906],
    [1, 11098404173866185376, 31706918649514],
    [1, 15152070965853306880, 32426601645695],
    [1, 17370091362040414208, 1663821395412],
    [1, 10141938552171134976, 13780941634539],
    [1, 10586988556645826560, 31723549795590],
    [1, 12169852093061922816, 9478573921799],
    [1, 16717361816799281152, 5639659729003],
    [1, 0, 12395906250000],
    [1, 0, 13584000000000],
    [15212079674427582640, 112, 0],
    [10179808126814248334, 112824648491, 0],
    [6066766544199222849, 2144184049294538808, 6],
    [6625308131806923533, 4108002197393276873, 6116236450],
    [9122786786400665714, 6446230217393892753, 23714222695245],
    [11932880778639151321, 5571068025259989822, 25421349450840],
    [3884040911779255012, 14804812668872528331, 29784302008202],
    [13441817515637357873, 17369928488562523047, 14218802570502],
    [11628577856022352827, 2967474173531035027, 9478941625710],
    [13296656925520243655, 5291425437992807716, 19822160867097],
    [5020720704545399399, 14219547193739388064, 28441286848747],
    [14121973606499014695, 17720313647158217462, 12523770843197],
    [3642481034345420115, 12334850628290578491, 4157960620127],
    [9845536238569696769, 7818499847417334620, 2143668673592],
    [17655403572195686357, 136007040922198372, 7224423841726],
    [8377495365136654030, 8523477092112604449, 32702007372956],
    [13713682649609025427, 367934822655966629, 27804462058619],
    [1367709905452854732, 12964987687054730050, 3195019945786],
    [9981467701727208681, 15267036012420885462, 26426702833390],
    [6277920117543306206, 11142900264750765568, 9966827627680],
    [9344111460418701727, 13680181547777718603, 25760604057833],
    [4918507011364617265, 13001922925761426065, 28905741604127],
    [6554777203830755260, 2397730045956515935, 21791704835654],
    [4198262173120265649, 4482395522588406288, 26182129981206],
    [8080325935698446820, 3255525722490493080, 5910242991148],
    [12797633874200091734, 836222287193822098, 7212176482403],
    [8376502502208665498, 420898743993182306, 8291045331701],
    [9891973386793349174, 11652649973356574054, 21237022816966],
    [14877430279003795463, 15058402726661910231, 31430631691420],
    [8759933935842067042, 9600134495208339559, 5276816317647],
    [3753418510388703514, 14626343323989004842, 7375520424333],
    [2961383332545305986, 6813981265331086665, 24973792895660],
    [2497674184068629508, 10281745288790487888, 25260369386664],
    [15244544070742305453, 17569829347075761940, 7336557374528],
    [45953573565810824, 7654580675237889478, 27712952462357],
    [3960077421351906446, 16194838649686212364, 27669414955649],
    [3173330011013883119, 6495102772252453635, 19073877923962],
    [11026266219545759161, 14935159852819761348, 22650352100226],
    [8886757764964685633, 17381879863441579697, 25474809636637],
    [13952322129918090480, 9062335510435372583, 10013942273595],
    [4127250666614902203, 7569219009130126626, 22075491270192],
    [17649958504065306912, 12652124168176193362, 15920410328184],
    [13269305359002216874, 8940200224697247767, 31864685873025],
    [16236593433831947844, 5600570701927432884, 18305484649225],
    [13580930396682424058, 2018432801986093157, 29449303607546],
    [421976357197961117, 8235849749361824736, 18682109419461],
    [2962130818798626534, 9705097287982370040, 24517446466309],
    [8234383947306356346, 3517483139049842585, 31493526114378],
    [4380469931801381426, 958281614186777760, 20554190683143],
    [15279887469027055917, 7336473432636108950, 31751051948550],
    [8534542821713755553, 12955383920176764423, 12806397711021],
    [7814613482565088783, 10735469126281273789, 21165702312769],
    [13771954404705323225, 8637888232514730693, 29505581970947],
    [4568173274762548145, 6806336737533581000, 30211468260859],
    [8105292616250821344, 16142569672872330321, 30203368972253],
    [2923678426777275613, 8141285259947963513, 8157875090455],
    [1808633176918384050, 5220241098754220797, 13335441339958],
    [18118642609460438970, 154438799943119608, 30262282989837],
    [18138164175864360871, 2226876628677628879, 12557008372144],
    [4031433690465792405, 17219557081221357482, 432120719223],
    [5012226396942308538, 15401507148161015114, 26487933474059],
    [7889712298793536836, 8842629766613985337, 5387834917375],
    [13500762396543628805, 3180100571546071440, 511479359920],
    [501020624068841348, 7740848704392475044, 10672172393597],
    [8370653768288261751, 2014314126623495998, 25725419632249],
    [647579990023635201, 11209566016506885858, 13945109196187],
    [11106569307181154305, 7117166613733441125, 11675607671791],
    [10797461613892861953, 4197646860931880328, 9199385822375],
    [17627230675448889345, 5487263271238026094, 17575227554892],
    [12197735707942322177, 18148076225293562697, 31820297465137],
    [12871287735024877569, 9127276943027950849, 27953983809183],
    [4611686018427387905, 9691696125379324722, 26271494790674],
    [1, 13102362262487705216, 24082525387899],
    [1, 8929385439893192704, 31867710280481],
    [1, 11891353410743566336, 4897484062954],
    [1, 1587423090877399040, 16618644631560],
    [1, 3489137423026225152, 28680086054378],
    [1, 13046928120492326912, 26090189146518],
    [1, 11529215046068469760, 18838707275390],
    [1, 0, 1662625000000],
    [1, 0, 10816000000000],
    [9451803574512021606, 1721567, 0],
    [8662766454758138425, 1721567512383298, 0],
    [9207992007314947036, 6674960280855494694, 93326],
    [17118602861291201803, 16378845781483497510, 27790361850321],
    [11186560605745599968, 17606907750956804392, 29137887899008],
    [10505549821532796848, 13225609159240506969, 11648954472381],
    [18133667530488679217, 2668084873338435252, 6077716961709],
    [10778135771244330800, 14802814305275861366, 6573144637170],
    [17087985777033767392, 8005510553372365574, 32498802462171],
    [2639185991757283041, 12748500143273514429, 3547433979596],
    [5401720287293896401, 10393733905569036127, 20172691097577],
    [9816495392633895234, 603389089974790339, 18409563445444],
    [10042051500090034991, 2033494532597735873, 22724032709788],
    [11629689537856384739, 9204796763694620958, 17564110235959],
    [2099086731766010484, 7826260310402107021, 10551498993032],
    [13665537898516458595, 10122690201685169383, 28040424262421],
    [16375672064669490765, 7438455564568110133, 2837548752135],
    [7770550512184564349, 2805412574380520817, 23815403239484],
    [6197048880720627315, 7250965427231182867, 30780152081720],
    [17963594118523106282, 8136242944826085924, 27960393075623],
    [8255454642407818664, 15357191647956011780, 2983441066613],
    [16744201957549498410, 7369614426695395460, 27253832515027],
    [17442505417202859723, 10886957545142526638, 32211399507598],
    [6383975767786687151, 2030047207417538097, 32398590183151],
    [15245442964998335796, 11557093828502314355, 1775110049079],
    [2910016124519524434, 15201062539664128543, 19767626511311],
    [3847913871169988464, 8846936323343880674, 13263824051251],
    [17210451512590059178, 1485291750116245364, 23603479593379],
    [17899408909991454146, 2076024439668322013, 16803080517827],
    [5920601932753251609, 7029497773682748741, 14531112541510],
    [16521781895108979745, 16333533921668749881, 7494381069837],
    [3697493405554698772, 2065057316131928423, 26125885442648],
    [2816108280295732066, 7800502648925570223, 2648111946981],
    [14251078772056398989, 17011619967093802015, 7397422866095],
    [4543066550096031418, 5368819344429198672, 7855922201766],
    [3099369389734296978, 15598879366754275267, 17574291044279],
    [5243484113636490987, 16393893486035835647, 30647845616944],
    [6823370511605197227, 12042046205096920307, 32048888714746],
    [11396290277624641943, 15437070428008474344, 5626652800632],
    [15934361408437566100, 13704569163204647509, 13944836845264],
    [14939272230935131955, 18192483750856993350, 28368742926182],
    [7500666177940329348, 5152535865317963250, 18278986216520],
    [4806714453065462271, 17512614083933854680, 29768279319528],
    [11557851247268441488, 14481918350603613536, 25576949360711],
    [10655523157206817382, 16124419709964004915, 10311785066366],
    [14769600176490881211, 18088011566435813579, 12158874106543],
    [16688495540925795168, 15008862380698848893, 15023980553071],
    [909793965395524174, 18160498644611827812, 9071813632059],
    [12724590949761703757, 3604680497457231965, 8251984482604],
    [10810739657314826396, 5957615565551495921, 4396195410121],
    [2431218615388671302, 17528455034961565995, 28873322962986],
    [4235001167959059287, 8503772325120113809, 8234950219451],
    [6253317787396334248, 8501492578048509537, 22203460990421],
    [9534525563070371899, 2296237701094386060, 13781460866836],
    [8392783992374030729, 3753593040591076946, 22292124479295],
    [16356257019231647541, 8518075399775653155, 12095203482686],
    [12896334001521091878, 12757855675959554597, 7230461765792],
    [1427636373320877085, 121631169379748595, 26784691604742],
    [16116755731295043522, 16679062494579173314, 19718006593638],
    [15945633911163986838, 10739912744743898054, 22630904173789],
    [7510154241072743839, 9367340677776287570, 5341582211836],
    [3571560509790395120, 12227321512794715397, 15100507804555],
    [3576991649007035077, 7241061891859170651, 21387662844427],
    [15509961892750732444, 13148571323079237489, 25099392538751],
    [17789791359353349379, 12509763434355012654, 22655712785479],
    [18331227331079738315, 11812768946960181977, 29767678155634],
    [15386712883100476417, 14170358803552564832, 23410640371487],
    [14082462055028752385, 18179989524780635952, 16159768176689],
    [12919043128765186049, 17091718978514754901, 26673985539206],
    [6125373368465096705, 7394768384359232459, 19590926543942],
    [12335992698065387521, 6778628272692852803, 11334400871197],
    [2774217370460225537, 18193335045875234320, 2845367470174],
    [1, 1378519212560967521, 2142986262669],
    [1, 4677732610631043584, 22669074729676],
    [1, 17296098591070486528, 2764253580392],
    [1, 7343735382392963072, 19560937623383],
    [1, 14525996728454217728, 3927398104692],
    [1, 9691359370008330240, 15988787455860],
    [1, 3044433348102455296, 10100525369644],
    [1, 9223372036854775808, 2348165039062],
    [1, 0, 982500000000],
    [4962829537462579599, 26, 0],
    [5711259460785241096, 26269035528, 0],
    [13845894607204897445, 7822291454600056379, 1],
    [12116633056637003328, 8201586317771250746, 1424047269],
    [2965791047992089561, 3278889188817135834, 15525444608885],
    [16021997451315962530, 1710725240251040430, 25461177748939],
    [3942052271663803857, 1850175733663425006, 3531092738601],
    [15669876414782439923, 9147599666163914249, 16937100298227],
    [10594415915406145287, 10221885933644344166, 18419495892371],
    [10789820553031921378, 14901479793736678101, 30099554129546],
    [3989990218583987245, 5181831442059703136, 22154807810838],
    [2937341169808224564, 6396246577759793483, 6934280907645],
    [16267436558584536844, 14167229556464870447, 11133346741221],
    [16221580362814625794, 2969982933326311854, 31717768007053],
    [9695437602320209831, 7892677766222018881, 3469161003097],
    [10729753156793715127, 798698968922663621, 30809427862919],
    [2609241432056861930, 15926812109043458972, 25991043297557],
    [8462663743997037566, 8663842590352697437, 12565863394214],
    [14993422143908194070, 17093523026636671168, 27558469667847],
    [1307443894537745374, 839764004742743203, 3079926641740],
    [10017257439419829266, 16894643909298232323, 29772045523697],
    [16754772009970777892, 9066702926218949317, 6897915860481],
    [11722573031602862388, 9119392417260546810, 5633491506950],
    [7363764277467092385, 9723021096578315109, 5894494363253],
    [6733958494847390773, 14787464248751217597, 7797527086029],
    [8799796600227451046, 3733434565920249133, 973801630043],
    [10512023194742249827, 6643788868836820841, 10587202389893],
    [4572542132337197060, 4729646697422664063, 1925360160516],
    [12600500455757416833, 4090144564201555829, 3844256394661],
    [7873789864743195200, 2109480737093400002, 28069221727181],
    [15724851676325671540, 16577155033369419739, 31693114355179],
    [8748017220462413168, 745377248603805917, 11755898649375],
    [14172589522760466449, 11305561465807999667, 15135040406981],
    [9520545591489413769, 2211245518782892177, 1477612875715],
    [12488551088392570223, 14170095199249735666, 12227119871859],
    [1135798823651241685, 17849973668116118927, 30579768162399],
    [11168725610120161973, 9020960204585720001, 30815967649011],
    [9580104948718508827, 10807134002871850916, 7411489027232],
    [16638722716909738766, 3925122626254791201, 13472585855908],
    [15732724012348272798, 17208463291312718997, 13220212781323],
    [12269722190021214143, 5145077219589447653, 12555932872664],
    [13110655916311972588, 17602397765035489468, 12248278915194],
    [6618112997062866868, 16422643262490753377, 22650954227894],
    [8457936459015989310, 2902509461400906224, 8374890273275],
    [3329167139937134915, 3422418805967265206, 6651157345353],
    [5245511557216705098, 4228874576277237392, 29769185529695],
    [5655931353280440467, 2553488530807495751, 3935229247750],
    [604622132328697394, 11546099176912486413, 262138424890],
    [8673282619234652339, 10460791037534167991, 28218625915290],
    [16929477433058445691, 8127117908566000904, 31130567080618],
    [11036952409253549456, 11541304458088287306, 31402440571944],
    [18199392190170386321, 6249718665174839700, 15400625655368],
    [9683116091880335716, 13102508413386290995, 20040338797927],
    [2993913337608915121, 6274675218640661911, 30055710288404],
    [4490779842162392586, 3404497118599817167, 27156340150825],
    [946849923353644619, 11258566093988562335, 4649184558158],
    [3613491058474899829, 16762592482501635397, 31822610328090],
    [14624054199004410936, 5550125446725071998, 27162908701959],
    [12088470271991908245, 6370033225258510318, 13575300872903],
    [10071980927725011291, 1503521728674735398, 31431345320193],
    [2833441711428854665, 4250415082606384364, 12545081506076],
    [17655572411864340447, 6020091901030562974, 31004230415463],
    [4997642792058747803, 16288222967151527138, 29799326349835],
    [11489200787635734849, 6377016228656203782, 31243882986336],
    [12983586226429536914, 8378856515587563750, 31584345698742],
    [12311150768725063153, 15812881490200838483, 12726454218721],
    [8530052476845967906, 4548570371183413652, 28641857218023],
    [6282736361499820265, 16731431495283420383, 9703246578493],
    [11337164765929082881, 14737727629551135532, 17213907012718],
    [8343856200414134273, 12413722258104293893, 3182798933815],
    [17889330377156198401, 800899742400762438, 3895672949232],
    [17730714064155312129, 603197008376033550, 18928043416862],
    [7449235258647511041, 6380777281587743935, 23838032699375],
    [9943947977234055169, 10001440249018225388, 8175345902629],
    [1, 5505914461980436708, 9253542179162],
    [1, 1105464290051876864, 12634298476221],
    [1, 4500443576769970176, 26301059927339],
    [1, 2843045143185981440, 3371243969535],
    [1, 660949699682893824, 7167154121786],
    [1, 276549164618219520, 27706035830155],
    [1, 4683743612465315840, 32139014991760],
    [1, 0, 28560253906250],
    [1, 0, 27978000000000],
    [12396245121240683570, 400833, 0],
    [10248996648596888562, 400833672001794, 0],
    [11257495103713935003, 4370024159708535157, 21729],
    [7555396579247433115, 7166684413908503888, 21729236899484],
    [4805022328730367463, 10217286283215687029, 22172388506740],
    [7056637817080232587, 4767369911989629198, 15476553880199],
    [10811411483818434914, 14407999214182082862, 4743258439640],
    [16962406704495245448, 8472271297615317358, 32728781059202],
    [18074517319117194670, 6236024012584764757, 29826459282747],
    [3702019776117654524, 1951826556984620523, 11579338055539],
    [3551977551381082765, 12357130551551830830, 24435105808729],
    [16442608985936005283, 8927758011099278464, 16729669881389],
    [3580046275479139589, 10199854049407140323, 20013483974731],
    [8737412692712715331, 17895455027038549577, 24651552935195],
    [3082033243045084753, 16539200343720527131, 19739970114560],
    [16401023756841128700, 3536976106235802604, 5120896591847],
    [7520296082779572870, 16980391644793590751, 26599191739858],
    [9854104766152464160, 10090294316609084067, 32210920508875],
    [14169188802648310189, 17603457857266236889, 3531546995950],
    [2018609909210367043, 11164962743035868272, 11502954285362],
    [8270271948267674360, 1585686890718568774, 2354605253843],
    [12320338602894572100, 10882524700472655412, 25811085960258],
    [17538536685990080548, 2194808754940947757, 9282589942846],
    [15833914616956760475, 274100791137209242, 25662118980821],
    [6137696141415969856, 12203404582981010903, 27861014859033],
    [9757490468419438920, 541940706340938166, 19737661547888],
    [3566639201356598904, 10305434016011833594, 9584029378664],
    [9760900035773954450, 7900783531944543546, 10344558658697],
    [3873778773990716439, 8920818625012419323, 1161428302333],
    [2295668377270167833, 12532363335400447632, 31229483598546],
    [1791721710912807594, 13483507182924762800, 17106679380777],
    [10571009006922683280, 415911049779278804, 15145730942389],
    [9840791932778184868, 3441628281170127418, 9653022546583],
    [11525464956561274614, 17830811568183566527, 23191186571042],
    [4435781488897895434, 17897295813176613411, 32546966610231],
    [6395563367070996742, 2086148701331574596, 8503970214350],
    [15538690795135662933, 13015567826878853432, 12750113090347],
    [16294558813563371937, 12944531121587846595, 11051705575345],
    [4942096228426070343, 3534180912913737995, 10161701724438],
    [6910116424372647154, 3447584022400118677, 8470191588331],
    [17923400669760829479, 6375676813770849297, 17387186893904],
    [4134686917293039956, 11580694081479200185, 13392345626132],
    [16857102463116098682, 1872134358882196482, 30228627790684],
    [11364321508775167452, 17602652840520938059, 7004101488606],
    [7966947780972783900, 10331040597716338351, 12254954241722],
    [11261055695926686279, 73785407041056976, 16058560046833],
    [9227040437353594059, 17166209109167902028, 26353003999914],
    [7185344074282882062, 8762475644006589904, 12970930582060],
    [14197856148610578033, 8839001228645872586, 12844475014756],
    [885688687260429428, 13558262784529110268, 24164479163216],
    [17407816160380305184, 5640853896420358111, 23376734994898],
    [17812728703806357350, 8459930353450835572, 16850305791302],
    [17120198191964319868, 7643830211500171269, 13638458613743],
    [12091952048375408787, 1308629115231236347, 8175414372866],
    [405056939269888282, 8957268500971669618, 27138070940926],
    [12485440679452408691, 7645679094277669412, 3326485574498],
    [8394369900823444408, 3821107497040617191, 13154414473094],
    [2877421667354294259, 8847137191985934072, 12166207142652],
    [2676980714750756240, 3531126524756088253, 31484479604268],
    [6119309228579057022, 8726915034124352183, 1580191422752],
    [18203256146533333853, 17611136727168068641, 6432473087011],
    [351919978865493748, 18017743272784259949, 31779954701634],
    [5190010931882390571, 18113575006829616116, 13634976743819],
    [6982466386088036605, 12805550441678740368, 395981938868],
    [4707293888784996899, 8061966093393027781, 24756694190280],
    [690306801165964761, 11954593141554100801, 2248437040057],
    [12456770961278956705, 14068656112359197734, 953648059792],
    [16946092489294063944, 895878255770467290, 5520762663376],
    [11098404173866185377, 10319906489512197802, 29136048565657],
    [15152070965853306881, 14551142616794302079, 11673559443251],
    [17370091362040414209, 15933181735739307476, 10035788819021],
    [10141938552171134977, 11524527334398983147, 10829863739512],
    [10586988556645826561, 11828012606225556742, 24696624745878],
    [12169852093061922817, 3556238869349799431, 3478641197848],
    [16717361816799281153, 7403090230513381483, 17176192784095],
    [1, 10172292854665622800, 5855401322325],
    [1, 11240746576366182400, 10069551441100],
    [1, 17021927826892259328, 25804609362092],
    [1, 9046328496309141504, 6316922760556],
    [1, 8038996803112140800, 28012490402450],
    [1, 17098478935265509376, 10898435794889],
    [1, 7205759403792793600, 26569926910400],
    [1, 0, 8640390625000],
    [1, 0, 30440000000000],
    [4108002197393276874, 6116236450, 0],
    [6446230217393892754, 6116236450222695245, 0],
    [5571068025259989823, 6240972538554414168, 331561842],
    [14804812668872528332, 4356262642990299018, 15218338323799],
    [17369928488562523048, 1335108558830511366, 23895236153471],
    [2967474173531035028, 18435704923261947246, 4223072376379],
    [5291425437992807717, 8395401931972636441, 5691999401566],
    [14219547193739388065, 12482665946362458347, 13918455115650],
    [17720313647158217463, 16101242875289374781, 12162676686676],
    [12334850628290578492, 4708983440241068127, 32596872850125],
    [7818499847417334621, 14856666972541426744, 27341255274503],
    [136007040922198373, 6938795288315789246, 28679805381530],
    [8523477092112604450, 5556307628265073820, 11162376152846],
    [367934822655966630, 1441404248927865979, 9998301208040],
    [12964987687054730051, 16710378912353838906, 7656078138680],
    [15267036012420885463, 18289940136919312110, 23864905871455],
    [11142900264750765569, 10217414145292657824, 12383991499641],
    [13680181547777718604, 12461165826430955753, 2937553887130],
    [13001922925761426066, 662762458988270879, 8090675521153],
    [2397730045956515936, 16488546856395302470, 9857035928424],
    [4482395522588406289, 2612816787977180950, 872893845916],
    [3255525722490493081, 16446616379327454252, 4508141641081],
    [836222287193822099, 7842178508581740643, 23929891572860],
    [420898743993182307, 14779029861369369333, 19580425125348],
    [11652649973356574055, 2697664446153849542, 15844801172814],
    [15058402726661910232, 12135106444393649308, 21838146240682],
    [9600134495208339560, 9550285041205189839, 170657845438],
    [14626343323989004843, 8790318168586740109, 4286517721989],
    [6813981265331086666, 14038474217155846828, 15237476524102],
    [10281745288790487889, 4263144264274812072, 8262761027212],
    [17569829347075761941, 11940456333341715520, 5772231105513],
    [7654580675237889479, 15751110736831573013, 23529647293434],
    [16194838649686212365, 18384528705472318081, 17402853869423],
    [6495102772252453636, 2393654818032310394, 18287996627298],
    [14935159852819761349, 12812209822018626434, 26978129760287],
    [17381879863441579698, 3110778569433458461, 20511694551286],
    [9062335510435372584, 2860264756226872891, 30966168635644],
    [7569219009130126627, 2384146980060315184, 18684155055263],
    [12652124168176193363, 14117430062880324728, 19615129244866],
    [8940200224697247768, 3769610173216737153, 5314765307417],
    [5600570701927432885, 17731974340232672009, 15897204350976],
    [2018432801986093158, 1971479303384713466, 24576961252255],
    [8235849749361824737, 3449462959779012549, 2975106874107],
    [9705097287982370041, 13743454852043766533, 15099186995761],
    [3517483139049842586, 7417711187131879498, 25137745034180],
    [958281614186777761, 3650992383501007879, 31684402114929],
    [7336473432636108951, 12838770342493958662, 29041197920693],
    [12955383920176764424, 16025068246546338477, 12725695991134],
    [10735469126281273790, 6579965938260177729, 19806868720690],
    [8637888232514730694, 4742939430174291459, 19506356700668],
    [6806336737533581001, 13062256857527449083, 17916257115261],
    [16142569672872330322, 2301174570202439645, 7293708106363],
    [8141285259947963514, 7638687886069412887, 31355124746923],
    [5220241098754220798, 936322449610274358, 2731414094100],
    [154438799943119609, 12926010544311283981, 276050758141],
    [2226876628677628880, 12647854908989899184, 18941700720435],
    [17219557081221357483, 8862093163358513015, 18227685641588],
    [15401507148161015115, 444784343917630731, 19828480415033],
    [8842629766613985338, 11033952249213387263, 5433024111807],
    [3180100571546071441, 18168634046363183536, 25791598151749],
    [7740848704392475045, 3837904761417065597, 18501984923625],
    [2014314126623495999, 111459007020906105, 12265208053234],
    [11209566016506885859, 16191761957496794523, 32242006042204],
    [7117166613733441126, 9856250800340378607, 9820877757174],
    [4197646860931880329, 9491800102275105959, 6902534308426],
    [5487263271238026095, 10777328578953608268, 586514551514],
    [18148076225293562698, 17424440628313779505, 21210584240152],
    [9127276943027950850, 3285814872419755679, 20504944580819],
    [9691696125379324723, 2824823424107240978, 6355178124381],
    [13102362262487705217, 12271707680713669755, 29789153133984],
    [8929385439893192705, 6951481875178001185, 1440665250606],
    [11891353410743566337, 10202522487003824362, 11054376840587],
    [1587423090877399041, 4834668463880990728, 28043553079852],
    [3489137423026225153, 10871520987687904746, 556262087902],
    [13046928120492326913, 12057698794225322390, 23774589346333],
    [11529215046068469761, 7263351819222681214, 25117653649161],
    [1, 1778055686910650944, 18185393747091],
    [1, 17108187120491986944, 13459096388591],
    [1, 3067636961549221888, 17391927436682],
    [1, 16702141595163557888, 9610166296932],
    [1, 2432053749942845440, 24932905424910],
    [1, 17791470327927144448, 6158131841897],
    [1, 1152921504606846976, 19305964477539],
    [1, 0, 7267062500000],
    [1, 0, 19104000000000],
    [6674960280855494695, 93326, 0],
    [16378845781483497511, 93326361850321, 0],
    [17606907750956804393, 4283581425266273664, 5059],
    [13225609159240506970, 6725911039793895357, 5059232213414],
    [2668084873338435253, 1188689198788975021, 10662364612368],
    [14802814305275861367, 10825527435847761650, 1808064438970],
    [8005510553372365575, 3917696829526085083, 25274586853018],
    [12748500143273514430, 12646861173976387276, 28314212378770],
    [10393733905569036128, 18398576063183996905, 10386685587717],
    [603389089974790340, 16919251228485834948, 28933997388806],
    [2033494532597735874, 17296019588687185052, 25606917194446],
    [9204796763694620959, 12365301604512770359, 718937619100],
    [7826260310402107022, 2814271599679204744, 31388670324343],
    [10122690201685169384, 2154994415780170517, 28279152561969],
    [7438455564568110134, 6717373824370072839, 20273116822481],
    [2805412574380520818, 12709155755801344060, 15313364149564],
    [7250965427231182868, 826847911966403896, 25916688964714],
    [8136242944826085925, 2277322703890025383, 7274044823515],
    [15357191647956011781, 2774508958389496437, 6107123453911],
    [7369614426695395461, 245697774950120915, 4055150406432],
    [10886957545142526639, 1268929063431863950, 11040013319303],
    [2030047207417538098, 6735665673159411439, 31879068788782],
    [11557093828502314356, 14734771742997073207, 10286365141167],
    [15201062539664128544, 13683287077957612495, 26799798773576],
    [8846936323343880675, 15370263741354826803, 26440741772478],
    [1485291750116245365, 48035913070297507, 23742833223667],
    [2076024439668322014, 1206547475966802115, 26611002604032],
    [7029497773682748742, 13512340386605768006, 31232065407069],
    [16333533921668749882, 2325760467700278797, 2141732505440],
    [2065057316131928424, 10848110652847753816, 1888126079727],
    [7800502648925570224, 15846378960784301285, 4847588077256],
    [17011619967093802016, 14121839924449844911, 28360859033924],
    [5368819344429198673, 5147613424753296550, 8516765546476],
    [15598879366754275268, 16817040482828810167, 30700279052682],
    [16393893486035835648, 5773528746119363888, 14730911653591],
    [12042046205096920308, 8716201595536184826, 7895312983620],
    [15437070428008474345, 5259122109038474872, 26180472506235],
    [13704569163204647510, 14744540084230155984, 1915285097580],
    [18192483750856993351, 10719345477982635878, 19564799303119],
    [5152535865317963251, 13698037261310555208, 7631581096882],
    [17512614083933854681, 16141171632951976936, 11186742572087],
    [14481918350603613537, 10060790174955808839, 13367875014667],
    [16124419709964004916, 4250043307981877118, 4107545396528],
    [18088011566435813580, 7075646198054337199, 17712230395309],
    [15008862380698848894, 18141738384245531503, 28077383571548],
    [18160498644611827813, 8174370508376809531, 22620983465608],
    [3604680497457231966, 3581964982731575596, 5768443133513],
    [5957615565551495922, 14798509948722114761, 32329194178710],
    [17528455034961565996, 14713923334885122090, 2198802228831],
    [8503772325120113810, 5042978054260414139, 26207797643382],
    [8501492578048509538, 2052996319372883413, 2166273380388],
    [2296237701094386061, 8825683007899981588, 4132111293153],
    [3753593040591076947, 9992196755378745151, 6881478441234],
    [8518075399775653156, 9301073417573669950, 30994541678071],
    [12757855675959554598, 5331614769144850592, 3575504212200],
    [121631169379748596, 14354009428310052102, 4328289027415],
    [16679062494579173315, 5581221063029119078, 17751778132410],
    [10739912744743898055, 1529260335339476189, 442302558600],
    [9367340677776287571, 16483061525949201148, 29064082901368],
    [12227321512794715398, 14431217812333089675, 18808893548555],
    [7241061891859170652, 3452349151135392267, 10251782317885],
    [13148571323079237490, 9075317899834447999, 26429187152222],
    [12509763434355012655, 2764331337978901575, 22878491973969],
    [11812768946960181978, 1942890683708857202, 6481149854702],
    [14170358803552564833, 165089169728028447, 1006105324315],
    [18179989524780635953, 15193620741871233073, 27419008949501],
    [17091718978514754902, 14995000835194145926, 23805823647830],
    [7394768384359232460, 1788823614552255558, 86812880624],
    [6778628272692852804, 8384901184618498845, 28400096972322],
    [18193335045875234321, 405511217862281310, 3618454546404],
    [1378519212560967522, 3111530463755196557, 10212021982807],
    [4677732610631043585, 7893558450035460812, 22103168676404],
    [17296098591070486529, 156573858237402216, 29236427910661],
    [7343735382392963073, 15915324019419451223, 28165008487885],
    [14525996728454217729, 16293363012778802804, 30157862771443],
    [9691359370008330241, 14342105318291351412, 6899883264978],
    [3044433348102455297, 3788398842525387052, 19410777487087],
    [9223372036854775809, 14118764407048307670, 14063205369512],
    [1, 2705021334614720768, 18088765379752],
    [1, 7017988973805568000, 21672146639500],
    [1, 10956732053634154496, 6796380445944],
    [1, 14657517938546835456, 7416593965634],
    [1, 11268868284797157376, 25154794585639],
    [1, 14600669991935148032, 32295610886573],
    [1, 4611686018427387904, 10669791503906],
    [1, 0, 26146250000000],
    [1, 0, 1664000000000],
    [8201586317771250747, 1424047269, 0],
    [3278889188817135835, 1424047269444608885, 0],
    [1710725240251040431, 3001188830946823627, 77197757],
    [1850175733663425007, 9732296932705387049, 29117162694772],
    [9147599666163914250, 16337535782679529459, 10356527588873],
    [10221885933644344167, 7969742269895046547, 26121885659589],
    [14901479793736678102, 2923592083903829642, 12741432040594],
    [5181831442059703137, 8144196241160608534, 23698158488244],
    [6396246577759793484, 16431078457793424253, 2740441497762],
    [14167229556464870448, 202362949592775653, 16546890730548],
    [2969982933326311855, 8835125248522947981, 19508010970117],
    [7892677766222018882, 7959873808777345113, 27653478953099],
    [798698968922663622, 14929747122315126151, 12427431505623],
    [15926812109043458973, 4310328817360515349, 28375809343213],
    [8663842590352697438, 7294899422760201126, 16109233663393],
    [17093523026636671169, 2047461597291187207, 28065395457290],
    [839764004742743204, 10942374468813517900, 15626110993115],
    [16894643909298232324, 10364795403063433969, 731593187308],
    [9066702926218949318, 12330859528790939137, 8172561876684],
    [9119392417260546811, 8973160144879916806, 18124668457234],
    [9723021096578315110, 2895354388547509877, 20754486435986],
    [14787464248751217598, 16766844772497556429, 8338156957475],
    [3733434565920249134, 7442407174620948827, 12067908932476],
    [6643788868836820842, 6683013428676659077, 21372403453701],
    [4729646697422664064, 16713703375071907588, 3845362286883],
    [4090144564201555830, 8791044883080637861, 291906051675],
    [2109480737093400003, 602844107089214413, 24155476563498],
    [16577155033369419740, 9754832281172880875, 5674032680244],
    [745377248603805918, 10587846778003503903, 19764528810517],
    [11305561465807999668, 17206244172922947013, 2581573968323],
    [2211245518782892178, 11620628420699303875, 8643932752365],
    [14170095199249735667, 17864732368219338611, 2541629955528],
    [17849973668116118928, 4146383014621345887, 24008968449082],
    [9020960204585720002, 11445705075042688243, 11322224775873],
    [10807134002871850917, 7369147888966546592, 4801620472915],
    [3925122626254791202, 9762476865090597796, 29779399482307],
    [17208463291312718998, 5507001428194242827, 7107529224931],
    [5145077219589447654, 11371471148365328344, 13027298535145],
    [17602397765035489469, 3148788104946538618, 26345616448686],
    [16422643262490753378, 3762722308424507574, 7342170696145],
    [2902509461400906225, 1156171244825745915, 27089203977585],
    [3422418805967265207, 14208921674868257865, 23921062676168],
    [4228874576277237393, 7903080886897905503, 1736770267187],
    [2553488530807495752, 6367240794154270982, 10291428426873],
    [11546099176912486414, 1623672396662369850, 1145345168815],
    [10460791037534167992, 18323231215381674394, 21935088019456],
    [8127117908566000905, 9842279843006544554, 10240993304354],
    [11541304458088287307, 7376839231308610600, 7970533551059],
    [6249718665174839701, 609751749293657672, 11219399899256],
    [13102508413386290996, 10386457966860989799, 30840033054708],
    [6274675218640661912, 11160336020836149780, 4084563051014],
    [3404497118599817168, 17947559933847409193, 518605003027],
    [11258566093988562336, 10229787001712704590, 22803972939173],
    [16762592482501635398, 10441677090043619866, 23973554557864],
    [5550125446725071999, 4996681336392922375, 5032566044449],
    [6370033225258510319, 124497102381021895, 14113270870638],
    [1503521728674735399, 8180812057779384577, 12910006749001],
    [4250415082606384365, 5294232873532946716, 18249443482710],
    [6020091901030562975, 2885620189169448039, 7254287000939],
    [16288222967151527139, 16662526875008170507, 9579156429783],
    [6377016228656203783, 15663095032402672480, 23511903277391],
    [8378856515587563751, 1824281504410546614, 4431849098083],
    [15812881490200838484, 9506565509584809953, 2915098894498],
    [4548570371183413653, 16941136942345070055, 8354515351948],
    [16731431495283420384, 15924115693705937725, 31116918380873],
    [14737727629551135533, 9247807690406628462, 22857863248041],
    [12413722258104293894, 7993916633864834871, 14505501324659],
    [800899742400762439, 1018504409177639408, 30067433351089],
    [603197008376033551, 12097800686634130718, 10161055213234],
    [6380777281587743936, 6221488888422637551, 9906655823089],
    [10001440249018225389, 8229322865256080421, 1265337267588],
    [5505914461980436709, 7927745108183101786, 30084446112486],
    [1105464290051876865, 8488683721235326653, 19174429763923],
    [4500443576769970177, 11165516518170922283, 10579460172466],
    [2843045143185981441, 5463648141113596927, 10930605283863],
    [660949699682893825, 3958440403860778042, 23063296184959],
    [276549164618219521, 5091534813990256011, 4735214587484],
    [4683743612465315841, 6100166970623291280, 3676276012655],
    [1, 1913011027739012426, 13935330690714],
    [1, 11310957650604221440, 1690103704535],
    [1, 16303817257009020928, 27607613168242],
    [1, 9090406322154766336, 23154883831704],
    [1, 3003279315069566976, 10136492791914],
    [1, 16582887146675765248, 22634162808097],
    [1, 9691746398101307392, 25889898960113],
    [1, 0, 5361525390625],
    [1, 0, 32033000000000],
];
